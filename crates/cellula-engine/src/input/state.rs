use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the current state and records deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered while unfocused.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent {
                button, state, x, y, ..
            }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.events.push(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn press_and_release_tracked() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::ArrowUp, KeyState::Pressed, false));
        assert!(st.key_down(Key::ArrowUp));
        assert!(fr.keys_pressed.contains(&Key::ArrowUp));

        fr.clear();
        st.apply_event(&mut fr, key(Key::ArrowUp, KeyState::Released, false));
        assert!(!st.key_down(Key::ArrowUp));
        assert!(fr.keys_released.contains(&Key::ArrowUp));
    }

    #[test]
    fn repeats_show_in_key_presses_only() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Letter('D'), KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Letter('D'), KeyState::Pressed, true));
        st.apply_event(&mut fr, key(Key::Letter('D'), KeyState::Pressed, true));

        assert_eq!(fr.keys_pressed.len(), 1);
        assert_eq!(fr.key_presses().count(), 3);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, false));
        st.apply_event(
            &mut fr,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 3.0,
                y: 4.0,
            }),
        );
        st.apply_event(&mut fr, InputEvent::Focused(false));

        assert!(st.keys_down.is_empty());
        assert!(!st.button_down(MouseButton::Left));
        assert_eq!(st.pointer_pos, Some((3.0, 4.0)));
    }

    #[test]
    fn pointer_leave_clears_position() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        assert_eq!(st.pointer_pos, Some((1.0, 2.0)));
        st.apply_event(&mut fr, InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, None);
        assert_eq!(fr.events.len(), 2);
    }
}
