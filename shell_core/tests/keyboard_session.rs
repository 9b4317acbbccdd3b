//! Sessions fed from raw PS/2 set 1 scancodes

use console_vga::TextGrid;
use hal::{HalKeyEvent, KeyboardDevice, KeyboardInput};
use shell_core::{ShellConfig, ShellSession};
use std::collections::VecDeque;

struct ScancodeQueue {
    events: VecDeque<HalKeyEvent>,
}

impl ScancodeQueue {
    /// Queues a make and a break code for every key
    fn typed(makes: &[u8]) -> Self {
        let events = makes
            .iter()
            .flat_map(|&code| [code, code | 0x80])
            .filter_map(HalKeyEvent::from_raw)
            .collect();
        Self { events }
    }
}

impl KeyboardDevice for ScancodeQueue {
    fn poll_event(&mut self) -> Option<HalKeyEvent> {
        self.events.pop_front()
    }
}

#[test]
fn test_scancodes_drive_echo() {
    let config = ShellConfig {
        banner: "",
        ..ShellConfig::default()
    };
    let mut session: ShellSession<TextGrid> = ShellSession::new(TextGrid::default(), config);
    session.boot();

    // e c h o space h i Enter
    let mut keyboard = KeyboardInput::new(ScancodeQueue::typed(&[
        0x12, 0x2E, 0x23, 0x18, 0x39, 0x23, 0x17, 0x1C,
    ]));
    let processed = session.run_until_idle(&mut keyboard);

    assert_eq!(processed, 8);
    assert_eq!(
        session.sink().render_text(),
        "pebble> echo hi\nhi\npebble> _"
    );
}

#[test]
fn test_scancode_backspace_edits_line() {
    let mut session: ShellSession<TextGrid> = ShellSession::new(TextGrid::default(), ShellConfig::default());
    session.boot();

    // l s s Backspace
    let mut keyboard = KeyboardInput::new(ScancodeQueue::typed(&[0x26, 0x1F, 0x1F, 0x0E]));
    session.run_until_idle(&mut keyboard);

    assert_eq!(session.editor().text(), "ls");
}
