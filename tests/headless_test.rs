//! Tests for headless autoplay.

use strictly_says::{MimicPlayer, SimonConfig, run_headless};

#[tokio::test(start_paused = true)]
async fn test_mimic_wins_every_game() {
    let config = SimonConfig::default().with_seed(11);
    let player = MimicPlayer::new("Mimic".to_string(), 2, None);

    let report = run_headless(config, player).await.unwrap();
    assert_eq!(*report.victories(), 2);
    assert_eq!(*report.defeats(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_blundering_mimic_loses() {
    let config = SimonConfig::default().with_seed(12);
    let player = MimicPlayer::new("Clumsy".to_string(), 1, Some(3));

    let report = run_headless(config, player).await.unwrap();
    assert_eq!(*report.victories(), 0);
    assert_eq!(*report.defeats(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_short_game_with_custom_levels() {
    let config = SimonConfig::default().with_seed(13).with_total_levels(2);
    let player = MimicPlayer::new("Mimic".to_string(), 3, None);

    let report = run_headless(config, player).await.unwrap();
    assert_eq!(*report.victories(), 3);
}
