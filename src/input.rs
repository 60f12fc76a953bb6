//! SDL2 event translation and per-frame input sampling

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Rect;
use sdl2::EventPump;

/// Keys the menu shell reacts to
///
/// Printable characters do not appear here; they arrive as
/// [`UiEvent::Text`] so keyboard layouts and shift are already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

/// Input events as seen by scenes and widgets
///
/// Raw SDL2 events are translated into this small vocabulary once per frame,
/// which decouples widget logic from SDL2 and lets it be driven from tests.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Key(Key),
    Text(String),
    PointerPressed { x: i32, y: i32 },
    PointerReleased { x: i32, y: i32 },
    PointerMoved { x: i32, y: i32 },
    /// Wheel notches, positive = away from the user
    Wheel(i32),
    Resized { width: u32, height: u32 },
    Quit,
}

/// Level state of the pointer sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub primary_down: bool,
}

impl PointerState {
    pub fn new(x: i32, y: i32, primary_down: bool) -> Self {
        PointerState { x, y, primary_down }
    }

    /// True if the pointer is inside `rect` (left/top inclusive)
    pub fn is_over(&self, rect: Rect) -> bool {
        rect.contains_point((self.x, self.y))
    }
}

/// Everything a scene sees in one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub events: Vec<UiEvent>,
    pub pointer: PointerState,
    /// Seconds elapsed since the previous frame
    pub dt: f32,
    /// Smoothed frames per second reported by the clock
    pub fps: f32,
}

/// Translate one SDL2 event, dropping the ones the menus ignore
pub fn translate_event(event: Event) -> Option<UiEvent> {
    match event {
        Event::Quit { .. } => Some(UiEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => translate_key(key).map(UiEvent::Key),
        Event::TextInput { text, .. } => Some(UiEvent::Text(text)),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(UiEvent::PointerPressed { x, y }),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(UiEvent::PointerReleased { x, y }),
        Event::MouseMotion { x, y, .. } => Some(UiEvent::PointerMoved { x, y }),
        Event::MouseWheel { y, .. } => Some(UiEvent::Wheel(y)),
        Event::Window {
            win_event:
                WindowEvent::Resized(width, height) | WindowEvent::SizeChanged(width, height),
            ..
        } => Some(UiEvent::Resized {
            width: width.max(1) as u32,
            height: height.max(1) as u32,
        }),
        _ => None,
    }
}

fn translate_key(key: Keycode) -> Option<Key> {
    match key {
        Keycode::Backspace => Some(Key::Backspace),
        Keycode::Delete => Some(Key::Delete),
        Keycode::Home => Some(Key::Home),
        Keycode::End => Some(Key::End),
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Return | Keycode::KpEnter => Some(Key::Enter),
        Keycode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Poll all pending SDL2 events and sample the pointer for this frame
///
/// Never blocks: an empty queue simply yields a frame without events.
pub fn poll_frame(event_pump: &mut EventPump, dt: f32, fps: f32) -> Frame {
    let events = event_pump.poll_iter().filter_map(translate_event).collect();

    let mouse = event_pump.mouse_state();
    let pointer = PointerState::new(mouse.x(), mouse.y(), mouse.left());

    Frame {
        events,
        pointer,
        dt,
        fps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_quit() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(translate_event(event), Some(UiEvent::Quit));
    }

    #[test]
    fn test_translate_text_input() {
        let event = Event::TextInput {
            timestamp: 0,
            window_id: 1,
            text: "a".to_string(),
        };
        assert_eq!(translate_event(event), Some(UiEvent::Text("a".to_string())));
    }

    #[test]
    fn test_translate_keys() {
        assert_eq!(translate_key(Keycode::Return), Some(Key::Enter));
        assert_eq!(translate_key(Keycode::KpEnter), Some(Key::Enter));
        assert_eq!(translate_key(Keycode::Escape), Some(Key::Escape));
        assert_eq!(translate_key(Keycode::Home), Some(Key::Home));
        assert_eq!(translate_key(Keycode::A), None);
    }

    #[test]
    fn test_pointer_is_over_is_left_top_inclusive() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(PointerState::new(10, 10, false).is_over(rect));
        assert!(PointerState::new(29, 29, false).is_over(rect));
        assert!(!PointerState::new(30, 30, false).is_over(rect));
        assert!(!PointerState::new(9, 15, false).is_over(rect));
    }
}
