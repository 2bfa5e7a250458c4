// Integration tests for trace playback

use pdatty::automaton::catalogue;
use pdatty::engine::run_str;
use pdatty::playback::{Mode, PlaybackController, View};
use std::thread;
use std::time::Duration;

fn anbn_controller(input: &str) -> PlaybackController {
    let pda = catalogue::find("anbn").unwrap().build().unwrap();
    PlaybackController::new(run_str(&pda, input))
}

#[test]
fn test_walk_forward_then_back() {
    let mut playback = anbn_controller("aabb");
    let mut heights = Vec::new();
    loop {
        match playback.current() {
            View::Configuration(cfg) => heights.push(cfg.stack_height()),
            View::Verdict(verdict) => {
                assert!(verdict.is_accepted());
                break;
            }
        }
        playback.step_forward();
    }
    assert_eq!(heights, vec![0, 1, 2, 1, 0]);

    while playback.step_backward() {}
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_rejected_run_still_replays() {
    let mut playback = anbn_controller("abba");
    // a, b consumed; second b pops on an empty stack
    assert_eq!(playback.len(), 3);
    playback.jump_to_end();
    match playback.current() {
        View::Verdict(verdict) => {
            assert_eq!(verdict.rejection().unwrap().kind(), "pop on empty stack");
        }
        other => panic!("expected verdict, got {:?}", other),
    }
}

#[test]
fn test_autoplay_with_system_clock() {
    let mut playback = anbn_controller("ab").with_interval(Duration::from_millis(1));
    playback.set_mode(Mode::Auto);

    let mut steps = 0;
    while playback.is_armed() {
        thread::sleep(Duration::from_millis(2));
        if playback.tick() {
            steps += 1;
        }
    }
    assert_eq!(steps, 3);
    assert!(playback.is_at_end());
    assert_eq!(playback.mode(), Mode::Auto);
}
