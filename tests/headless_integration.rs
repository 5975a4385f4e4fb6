use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Headless integration using the internal runtime + Session without a TTY
// Verifies that a minimal typing flow completes via Runner/TestEventSource.
#[test]
fn headless_typing_flow_completes() {
    // Arrange: build a session over a short passage
    let mut session = retype::session::Session::new("hi there".to_string());

    // Channel for the test event source
    let (tx, rx) = mpsc::channel();

    // Create TestEventSource and Runner with a small tick interval
    let es = retype::runtime::TestEventSource::new(rx);
    let ticker = retype::runtime::FixedTicker::new(Duration::from_millis(5));
    let runner = retype::runtime::Runner::new(es, ticker);

    // Producer: send the keystrokes for the passage
    for c in "hi there".chars() {
        tx.send(retype::runtime::AppEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }

    // Act: drive a tiny event loop until complete (or bounded steps)
    for _ in 0..100u32 {
        match runner.step() {
            retype::runtime::AppEvent::Tick => session.on_tick(),
            retype::runtime::AppEvent::Resize => {}
            retype::runtime::AppEvent::Paste(_) => {}
            retype::runtime::AppEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    session.type_char(c);
                    if session.is_complete() {
                        break;
                    }
                }
            }
        }
    }

    // Assert: complete and results computable
    assert!(session.is_complete(), "session should have typed the passage");
    let record = session.stop();
    assert!(record.is_some(), "perfect run should qualify");
    assert_eq!(session.accuracy, 1.0);
}

#[test]
fn headless_paste_is_rejected() {
    let mut session = retype::session::Session::new("hello world".to_string());

    let (tx, rx) = mpsc::channel();
    let es = retype::runtime::TestEventSource::new(rx);
    let ticker = retype::runtime::FixedTicker::new(Duration::from_millis(5));
    let runner = retype::runtime::Runner::new(es, ticker);

    tx.send(retype::runtime::AppEvent::Paste("hello world".to_string()))
        .unwrap();
    tx.send(retype::runtime::AppEvent::Key(KeyEvent::new(
        KeyCode::Char('h'),
        KeyModifiers::NONE,
    )))
    .unwrap();

    for _ in 0..10u32 {
        match runner.step() {
            // Paste never reaches the session; only real keystrokes count
            retype::runtime::AppEvent::Paste(_) => {}
            retype::runtime::AppEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    session.type_char(c);
                    break;
                }
            }
            _ => {}
        }
    }

    assert_eq!(session.typed, "h");
}

#[test]
fn headless_ticks_advance_elapsed_display() {
    // The tick only refreshes the displayed elapsed time; with a backdated
    // start it becomes visible immediately.
    let mut session = retype::session::Session::new("hello".to_string());
    session.type_char('h');
    session.started_at = Some(std::time::SystemTime::now() - Duration::from_secs(3));

    let (_tx, rx) = mpsc::channel();
    let es = retype::runtime::TestEventSource::new(rx);
    let ticker = retype::runtime::FixedTicker::new(Duration::from_millis(5));
    let runner = retype::runtime::Runner::new(es, ticker);

    if let retype::runtime::AppEvent::Tick = runner.step() {
        session.on_tick();
    }

    assert_eq!(session.elapsed_secs, 3);
}
