//! Keyboard and gamepad input
//!
//! Hosts translate device events into [`InputEvent`]s and push them onto the
//! [`InputQueue`]. The critical-tier input system drains the queue once per
//! frame, so capture never mutates game state directly.

use std::collections::{HashSet, VecDeque};

/// Keyboard key identifier
///
/// Only keys with a binding get their own variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    A,
    D,
    J,
    P,
    Q,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    F11,
    /// Platform-dependent key with no binding
    Other(u32),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "a" | "A" => Key::A,
            "d" | "D" => Key::D,
            "j" | "J" => Key::J,
            "p" | "P" => Key::P,
            "q" | "Q" => Key::Q,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "F11" => Key::F11,
            other => Key::Other(other.chars().next().map(u32::from).unwrap_or(0)),
        }
    }
}

/// Gamepad buttons, standard layout
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GamepadButton {
    South,
    East,
    West,
    North,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    Select,
    Start,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl GamepadButton {
    fn is_dpad(self) -> bool {
        matches!(
            self,
            GamepadButton::DPadUp
                | GamepadButton::DPadDown
                | GamepadButton::DPadLeft
                | GamepadButton::DPadRight
        )
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
}

/// Device-agnostic input event
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, pressed: bool },
    GamepadButton { button: GamepadButton, pressed: bool },
    GamepadAxis { axis: GamepadAxis, value: f32 },
    GamepadConnected(bool),
    Focus(bool),
}

/// Edge-triggered commands produced by input
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Start,
    Pause,
    /// Leave a paused or finished match for the menu
    Quit,
    ToggleFullscreen,
    TogglePerfMode,
    FocusLost,
}

/// FIFO of events captured since the last frame
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Held keys, buttons and stick position
#[derive(Debug)]
pub struct InputState {
    keys_down: HashSet<Key>,
    buttons_down: HashSet<GamepadButton>,
    stick_x: f32,
    gamepad_connected: bool,
    focused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            stick_x: 0.0,
            gamepad_connected: false,
            focused: true,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, returning the action it triggers, if any
    ///
    /// Actions fire on the press edge only; OS key repeat is ignored.
    pub fn apply(&mut self, event: InputEvent) -> Option<Action> {
        match event {
            InputEvent::Key { key, pressed: true } => {
                if !self.keys_down.insert(key) {
                    return None;
                }
                match key {
                    Key::Space => Some(Action::Start),
                    Key::Escape => Some(Action::Pause),
                    Key::F11 | Key::J => Some(Action::ToggleFullscreen),
                    Key::P => Some(Action::TogglePerfMode),
                    Key::Q => Some(Action::Quit),
                    _ => None,
                }
            }
            InputEvent::Key { key, pressed: false } => {
                self.keys_down.remove(&key);
                None
            }
            InputEvent::GamepadButton {
                button,
                pressed: true,
            } => {
                self.gamepad_connected = true;
                if !self.buttons_down.insert(button) {
                    return None;
                }
                match button {
                    GamepadButton::Select => Some(Action::Pause),
                    b if b.is_dpad() => None,
                    _ => Some(Action::Start),
                }
            }
            InputEvent::GamepadButton {
                button,
                pressed: false,
            } => {
                self.buttons_down.remove(&button);
                None
            }
            InputEvent::GamepadAxis {
                axis: GamepadAxis::LeftStickX,
                value,
            } => {
                self.gamepad_connected = true;
                self.stick_x = if value.is_finite() {
                    value.clamp(-1.0, 1.0)
                } else {
                    0.0
                };
                None
            }
            InputEvent::GamepadAxis { .. } => None,
            InputEvent::GamepadConnected(connected) => {
                self.gamepad_connected = connected;
                if !connected {
                    self.buttons_down.clear();
                    self.stick_x = 0.0;
                }
                None
            }
            InputEvent::Focus(focused) => {
                let was_focused = self.focused;
                self.focused = focused;
                if focused {
                    return None;
                }
                // Releases are never delivered while unfocused
                self.keys_down.clear();
                self.buttons_down.clear();
                self.stick_x = 0.0;
                was_focused.then_some(Action::FocusLost)
            }
        }
    }

    /// Paddle movement in `[-1, 1]`
    ///
    /// Keyboard wins over the D-pad, which wins over the analog stick. The
    /// stick dead-zone is removed and the remaining range rescaled.
    pub fn move_axis(&self, stick_deadzone: f32) -> f32 {
        let keys = self.held_axis(
            self.keys_down.contains(&Key::A) || self.keys_down.contains(&Key::ArrowLeft),
            self.keys_down.contains(&Key::D) || self.keys_down.contains(&Key::ArrowRight),
        );
        if let Some(axis) = keys {
            return axis;
        }

        let dpad = self.held_axis(
            self.buttons_down.contains(&GamepadButton::DPadLeft),
            self.buttons_down.contains(&GamepadButton::DPadRight),
        );
        if let Some(axis) = dpad {
            return axis;
        }

        let magnitude = self.stick_x.abs();
        if magnitude <= stick_deadzone {
            return 0.0;
        }
        let scaled = (magnitude - stick_deadzone) / (1.0 - stick_deadzone);
        (scaled * self.stick_x.signum()).clamp(-1.0, 1.0)
    }

    fn held_axis(&self, negative: bool, positive: bool) -> Option<f32> {
        match (negative, positive) {
            (false, false) => None,
            (true, true) => Some(0.0),
            (true, false) => Some(-1.0),
            (false, true) => Some(1.0),
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    pub fn focused(&self) -> bool {
        self.focused
    }
}
