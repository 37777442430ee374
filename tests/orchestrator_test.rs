//! Tests for round orchestration with a paused clock.

use strictly_says::{
    ChannelPresentation, Color, FinalOutcome, Phase, PlayerInput, RoundOrchestrator,
    SUCCESS_MESSAGE, SimonConfig, SimonEvent, TITLE, WAIT_MESSAGE, level_heading,
    remaining_guesses_message,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};

type Orchestrator = RoundOrchestrator<ChannelPresentation>;

struct Harness {
    input_tx: UnboundedSender<PlayerInput>,
    events: UnboundedReceiver<SimonEvent>,
    handle: JoinHandle<anyhow::Result<Orchestrator>>,
}

fn spawn(config: SimonConfig) -> Harness {
    let (presentation, events) = ChannelPresentation::channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let mut orchestrator = RoundOrchestrator::from_config(config, presentation, input_rx);
    let handle = tokio::spawn(async move {
        orchestrator.run().await?;
        Ok::<_, anyhow::Error>(orchestrator)
    });
    Harness {
        input_tx,
        events,
        handle,
    }
}

/// Receives events up to and including the first one matching `stop`.
async fn collect_until(
    events: &mut UnboundedReceiver<SimonEvent>,
    stop: impl Fn(&SimonEvent) -> bool,
) -> Vec<SimonEvent> {
    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        let done = stop(&event);
        seen.push(event);
        if done {
            break;
        }
    }
    seen
}

fn turn_opened(event: &SimonEvent) -> bool {
    *event == SimonEvent::InputAllowed(true)
}

fn flashes(events: &[SimonEvent]) -> Vec<Color> {
    events
        .iter()
        .filter_map(|e| match e {
            SimonEvent::TileFlash(color) => Some(*color),
            _ => None,
        })
        .collect()
}

fn sounds(events: &[SimonEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SimonEvent::Sound(_)))
        .count()
}

fn idle_events() -> Vec<SimonEvent> {
    vec![
        SimonEvent::Heading(TITLE.to_string()),
        SimonEvent::Status(None),
        SimonEvent::InputAllowed(false),
        SimonEvent::StartAvailable(true),
    ]
}

fn other_than(color: Color) -> Color {
    Color::ALL
        .into_iter()
        .find(|c| *c != color)
        .expect("Four colors")
}

#[tokio::test(start_paused = true)]
async fn test_idle_view_on_launch() {
    let mut h = spawn(SimonConfig::default().with_seed(1));
    let events = collect_until(&mut h.events, |e| *e == SimonEvent::StartAvailable(true)).await;
    assert_eq!(events, idle_events());
}

#[tokio::test(start_paused = true)]
async fn test_first_round_choreography() {
    let mut h = spawn(SimonConfig::default().with_seed(2));
    collect_until(&mut h.events, |e| *e == SimonEvent::StartAvailable(true)).await;

    let started = Instant::now();
    h.input_tx.send(PlayerInput::Start).unwrap();
    let events = collect_until(&mut h.events, turn_opened).await;
    let elapsed = started.elapsed();

    let color = flashes(&events)[0];
    assert_eq!(
        events,
        vec![
            SimonEvent::StartAvailable(false),
            SimonEvent::Heading(level_heading(1, 5)),
            SimonEvent::InputAllowed(false),
            SimonEvent::Status(Some(WAIT_MESSAGE.to_string())),
            SimonEvent::Sound(color),
            SimonEvent::TileFlash(color),
            SimonEvent::TileClear(color),
            SimonEvent::Status(Some(remaining_guesses_message(1))),
            SimonEvent::InputAllowed(true),
        ]
    );

    // flash + gap + pause before guessing
    assert!(elapsed >= Duration::from_millis(1650), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1700), "elapsed {:?}", elapsed);
}

/// Receives events until `stop`, stamping each with its offset from `origin`.
async fn timeline_until(
    events: &mut UnboundedReceiver<SimonEvent>,
    origin: Instant,
    stop: impl Fn(&SimonEvent) -> bool,
) -> Vec<(Duration, SimonEvent)> {
    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        let done = stop(&event);
        seen.push((origin.elapsed(), event));
        if done {
            break;
        }
    }
    seen
}

fn assert_near(actual: Duration, expected_ms: u64) {
    let expected = Duration::from_millis(expected_ms);
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(5),
        "expected ~{:?}, got {:?}",
        expected,
        actual
    );
}

#[tokio::test(start_paused = true)]
async fn test_multi_tile_playback_lights_one_tile_at_a_time() {
    let mut h = spawn(SimonConfig::default().with_seed(10));
    h.input_tx.send(PlayerInput::Start).unwrap();

    // Clear the first two rounds
    for _ in 0..2 {
        let events = collect_until(&mut h.events, turn_opened).await;
        for color in flashes(&events) {
            h.input_tx.send(PlayerInput::TileSelected(color)).unwrap();
        }
    }

    let heading = SimonEvent::Heading(level_heading(3, 5));
    collect_until(&mut h.events, |e| *e == heading).await;
    let origin = Instant::now();
    let timeline = timeline_until(&mut h.events, origin, turn_opened).await;

    let lamp: Vec<_> = timeline
        .iter()
        .filter(|(_, e)| matches!(e, SimonEvent::TileFlash(_) | SimonEvent::TileClear(_)))
        .collect();
    assert_eq!(lamp.len(), 6, "Three flashes, three clears");

    for (i, pair) in lamp.chunks(2).enumerate() {
        let (lit_at, SimonEvent::TileFlash(lit)) = pair[0] else {
            panic!("Expected a flash, got {:?}", pair[0]);
        };
        let (cleared_at, SimonEvent::TileClear(cleared)) = pair[1] else {
            panic!("Expected a clear, got {:?}", pair[1]);
        };
        assert_eq!(lit, cleared, "Each clear matches the preceding flash");

        // 600ms lit, 50ms gap
        let start = i as u64 * 650;
        assert_near(*lit_at, start);
        assert_near(*cleared_at, start + 600);
    }

    let (opened_at, _) = timeline.last().expect("Turn opened");
    assert_near(*opened_at, 3 * 650 + 1000);
}

#[tokio::test(start_paused = true)]
async fn test_input_during_playback_is_dropped() {
    let mut h = spawn(SimonConfig::default().with_seed(3));
    for color in Color::ALL {
        h.input_tx.send(PlayerInput::TileSelected(color)).unwrap();
    }
    h.input_tx.send(PlayerInput::Start).unwrap();
    for color in Color::ALL {
        h.input_tx.send(PlayerInput::TileSelected(color)).unwrap();
    }

    let events = collect_until(&mut h.events, turn_opened).await;
    assert_eq!(sounds(&events), 1, "Only the playback sound");

    drop(h.input_tx);
    let orchestrator = h.handle.await.unwrap().unwrap();
    assert!(h.events.try_recv().is_err(), "No guess was processed");

    assert_eq!(orchestrator.game().phase(), Phase::AwaitingGuess);
    assert!(orchestrator.game().guesses().is_empty());
    assert_eq!(orchestrator.game().level(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_full_game_is_won() {
    let mut h = spawn(SimonConfig::default().with_seed(4));
    h.input_tx.send(PlayerInput::Start).unwrap();

    let mut previous: Vec<Color> = Vec::new();
    for level in 1..=5 {
        let events = collect_until(&mut h.events, turn_opened).await;
        assert!(events.contains(&SimonEvent::Heading(level_heading(level, 5))));

        // The whole sequence is replayed, extended by one color
        let shown = flashes(&events);
        assert_eq!(shown.len(), level);
        assert!(shown.starts_with(&previous));

        for color in &shown {
            h.input_tx.send(PlayerInput::TileSelected(*color)).unwrap();
        }
        previous = shown;

        if level < 5 {
            let events = collect_until(&mut h.events, |e| {
                *e == SimonEvent::Status(Some(SUCCESS_MESSAGE.to_string()))
            })
            .await;
            assert_eq!(sounds(&events), level, "One sound per accepted click");
        }
    }

    let events = collect_until(&mut h.events, |e| *e == SimonEvent::StartAvailable(true)).await;
    let finished = events
        .iter()
        .position(|e| *e == SimonEvent::Finished(FinalOutcome::Victory))
        .expect("Victory signal");
    assert!(events.contains(&SimonEvent::Status(Some(remaining_guesses_message(0)))));
    assert_eq!(&events[finished + 1..], idle_events().as_slice());

    drop(h.input_tx);
    let orchestrator = h.handle.await.unwrap().unwrap();
    assert_eq!(orchestrator.game().phase(), Phase::Idle);
    assert_eq!(orchestrator.game().level(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_wrong_guess_loses_and_resets() {
    let mut h = spawn(SimonConfig::default().with_seed(5));
    h.input_tx.send(PlayerInput::Start).unwrap();

    let events = collect_until(&mut h.events, turn_opened).await;
    let wrong = other_than(flashes(&events)[0]);
    h.input_tx.send(PlayerInput::TileSelected(wrong)).unwrap();

    let events = collect_until(&mut h.events, |e| *e == SimonEvent::StartAvailable(true)).await;
    let mut expected = vec![
        SimonEvent::Sound(wrong),
        SimonEvent::Finished(FinalOutcome::Defeat),
    ];
    expected.extend(idle_events());
    assert_eq!(events, expected);
}

#[tokio::test(start_paused = true)]
async fn test_partial_guess_updates_remaining() {
    let mut h = spawn(SimonConfig::default().with_seed(6));
    h.input_tx.send(PlayerInput::Start).unwrap();

    let events = collect_until(&mut h.events, turn_opened).await;
    h.input_tx
        .send(PlayerInput::TileSelected(flashes(&events)[0]))
        .unwrap();

    let events = collect_until(&mut h.events, turn_opened).await;
    let shown = flashes(&events);
    assert_eq!(shown.len(), 2);

    h.input_tx.send(PlayerInput::TileSelected(shown[0])).unwrap();
    let events = collect_until(&mut h.events, |e| matches!(e, SimonEvent::Status(_))).await;
    assert_eq!(
        events,
        vec![
            SimonEvent::Sound(shown[0]),
            SimonEvent::Status(Some(remaining_guesses_message(1))),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_start_ignored_while_running() {
    let mut h = spawn(SimonConfig::default().with_seed(7));
    h.input_tx.send(PlayerInput::Start).unwrap();
    let events = collect_until(&mut h.events, turn_opened).await;
    let color = flashes(&events)[0];

    h.input_tx.send(PlayerInput::Start).unwrap();
    h.input_tx.send(PlayerInput::TileSelected(color)).unwrap();

    let events = collect_until(&mut h.events, |e| matches!(e, SimonEvent::Status(_))).await;
    assert_eq!(
        events,
        vec![
            SimonEvent::Sound(color),
            SimonEvent::InputAllowed(false),
            SimonEvent::Status(Some(SUCCESS_MESSAGE.to_string())),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_single_level_game_wins_on_first_round() {
    let config = SimonConfig::default().with_seed(8).with_total_levels(1);
    let mut h = spawn(config);
    h.input_tx.send(PlayerInput::Start).unwrap();

    let events = collect_until(&mut h.events, turn_opened).await;
    assert!(events.contains(&SimonEvent::Heading(level_heading(1, 1))));
    h.input_tx
        .send(PlayerInput::TileSelected(flashes(&events)[0]))
        .unwrap();

    let events = collect_until(&mut h.events, |e| matches!(e, SimonEvent::Finished(_))).await;
    assert_eq!(events.last(), Some(&SimonEvent::Finished(FinalOutcome::Victory)));
}

#[tokio::test(start_paused = true)]
async fn test_new_game_after_defeat_starts_at_level_one() {
    let mut h = spawn(SimonConfig::default().with_seed(9));
    h.input_tx.send(PlayerInput::Start).unwrap();
    let events = collect_until(&mut h.events, turn_opened).await;
    h.input_tx
        .send(PlayerInput::TileSelected(other_than(flashes(&events)[0])))
        .unwrap();
    collect_until(&mut h.events, |e| *e == SimonEvent::StartAvailable(true)).await;

    h.input_tx.send(PlayerInput::Start).unwrap();
    let events = collect_until(&mut h.events, turn_opened).await;
    assert!(events.contains(&SimonEvent::Heading(level_heading(1, 5))));
    assert_eq!(flashes(&events).len(), 1);
}

#[test]
fn test_unknown_tile_label_is_dropped() {
    assert_eq!(PlayerInput::tile_from_label("purple"), None);
    assert_eq!(
        PlayerInput::tile_from_label("Blue"),
        Some(PlayerInput::TileSelected(Color::Blue))
    );
}
