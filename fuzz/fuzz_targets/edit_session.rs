#![no_main]

use libfuzzer_sys::fuzz_target;
use seedgate_prompt::{ConfirmSession, InputEvent};

fn event(byte: u8) -> InputEvent {
    match byte % 8 {
        0..=2 => InputEvent::Digit(char::from(b'0' + byte % 10)),
        3 => InputEvent::Backspace,
        4 => InputEvent::Left,
        5 => InputEvent::Right,
        6 => InputEvent::Confirm,
        _ => InputEvent::Ignored,
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&max_len, keys)) = data.split_first() else {
        return;
    };
    let max_len = usize::from(max_len % 12);
    let mut session = ConfirmSession::new("123456", max_len);

    for &byte in keys {
        session.handle(event(byte));
        let buffer = session.buffer();
        assert!(buffer.len() <= buffer.max_len());
        assert!(buffer.cursor() <= buffer.len());
    }
});
