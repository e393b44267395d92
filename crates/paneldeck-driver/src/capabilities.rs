//! Capability button wiring.
//!
//! Each device capability owns a fixed join table. Linking a device binds
//! every table its profile declares to `Device { id, button }` commands;
//! unlinking clears exactly those joins. The decision space is the
//! declared capability set — nothing is probed at runtime beyond it.

use paneldeck_core::{BoolJoin, Capability, DeviceButton, DeviceProfile};

use crate::{bindings::ButtonBindings, command::PanelCommand, joins};

/// Join table for one capability.
fn table(capability: Capability) -> &'static [(BoolJoin, DeviceButton)] {
    use joins::device as j;
    match capability {
        Capability::Power => &[(j::POWER_TOGGLE, DeviceButton::PowerToggle)],
        Capability::Channel => &[
            (j::CHANNEL_UP, DeviceButton::ChannelUp),
            (j::CHANNEL_DOWN, DeviceButton::ChannelDown),
            (j::LAST_CHANNEL, DeviceButton::LastChannel),
        ],
        Capability::Color => &[
            (j::RED, DeviceButton::Red),
            (j::GREEN, DeviceButton::Green),
            (j::YELLOW, DeviceButton::Yellow),
            (j::BLUE, DeviceButton::Blue),
        ],
        Capability::DPad => &[
            (j::DPAD_UP, DeviceButton::Up),
            (j::DPAD_DOWN, DeviceButton::Down),
            (j::DPAD_LEFT, DeviceButton::Left),
            (j::DPAD_RIGHT, DeviceButton::Right),
            (j::DPAD_SELECT, DeviceButton::Select),
            (j::MENU, DeviceButton::Menu),
            (j::EXIT, DeviceButton::Exit),
        ],
        Capability::Dvr => &[(j::DVR_LIST, DeviceButton::DvrList), (j::RECORD, DeviceButton::Record)],
        Capability::NumericKeypad => &[
            (j::DIGIT_DASH, DeviceButton::Dash),
            (j::KEYPAD_ENTER, DeviceButton::KeypadEnter),
        ],
        Capability::Transport => &[
            (j::PLAY, DeviceButton::Play),
            (j::PAUSE, DeviceButton::Pause),
            (j::STOP, DeviceButton::Stop),
            (j::REWIND, DeviceButton::Rewind),
            (j::FAST_FORWARD, DeviceButton::FastForward),
            (j::CHAPTER_MINUS, DeviceButton::ChapterMinus),
            (j::CHAPTER_PLUS, DeviceButton::ChapterPlus),
        ],
        Capability::SetTopBox => &[(j::GUIDE, DeviceButton::Guide)],
        Capability::DiscPlayer => &[],
    }
}

/// Keypad digits live in a contiguous join block.
fn digit_join(digit: u8) -> BoolJoin {
    BoolJoin(joins::device::DIGIT_BASE.0 + u16::from(digit))
}

/// Bind every capability surface `profile` declares. State bindings:
/// transport and ramp buttons need the press edge as well as the release.
pub fn link_buttons(profile: &DeviceProfile, bindings: &mut ButtonBindings) {
    for capability in Capability::ALL {
        if !profile.has(capability) {
            continue;
        }
        for (join, button) in table(capability) {
            bindings.bind_state(
                *join,
                PanelCommand::Device { device: profile.id.clone(), button: *button },
            );
        }
        if capability == Capability::NumericKeypad {
            for digit in 0..=9u8 {
                bindings.bind_state(
                    digit_join(digit),
                    PanelCommand::Device { device: profile.id.clone(), button: DeviceButton::Digit(digit) },
                );
            }
        }
    }
}

/// Clear every join a declared capability surface had bound.
pub fn unlink_buttons(profile: &DeviceProfile, bindings: &mut ButtonBindings) {
    for capability in Capability::ALL {
        if !profile.has(capability) {
            continue;
        }
        for (join, _) in table(capability) {
            bindings.clear(*join);
        }
        if capability == Capability::NumericKeypad {
            for digit in 0..=9u8 {
                bindings.clear(digit_join(digit));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use paneldeck_core::DeviceId;

    use super::*;

    fn profile(capabilities: &[Capability]) -> DeviceProfile {
        DeviceProfile { id: DeviceId("dev".into()), capabilities: capabilities.to_vec() }
    }

    #[test]
    fn link_wires_only_declared_capabilities() {
        let mut bindings = ButtonBindings::new();
        link_buttons(&profile(&[Capability::Channel]), &mut bindings);

        assert!(bindings.resolve(joins::device::CHANNEL_UP, true).is_some());
        assert_eq!(bindings.resolve(joins::device::PLAY, true), None);
        assert_eq!(bindings.len(), 3);
    }

    #[test]
    fn unlink_removes_exactly_what_link_added() {
        let mut bindings = ButtonBindings::new();
        let dev = profile(&[Capability::Transport, Capability::NumericKeypad, Capability::DPad]);

        link_buttons(&dev, &mut bindings);
        assert!(!bindings.is_empty());

        unlink_buttons(&dev, &mut bindings);
        assert!(bindings.is_empty());
    }

    #[test]
    fn keypad_digits_bind_contiguously() {
        let mut bindings = ButtonBindings::new();
        link_buttons(&profile(&[Capability::NumericKeypad]), &mut bindings);

        let nine = bindings.resolve(digit_join(9), true);
        assert!(matches!(
            nine,
            Some(PanelCommand::Device { button: DeviceButton::Digit(9), .. })
        ));
    }
}
