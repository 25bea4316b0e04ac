//! Virtual Keyboard (Linux)
//!
//! Sends the paste shortcut through a short-lived `/dev/uinput` device.
//! Events arrive from the kernel, so this reaches native Wayland clients
//! that enigo and xdotool cannot.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::io::AsRawFd;
use std::time::Duration;

use crate::paste::PasteError;

const EV_SYN: u16 = 0x00;
const EV_KEY: u16 = 0x01;
const SYN_REPORT: u16 = 0x00;
const KEY_LEFTCTRL: u16 = 29;
const KEY_V: u16 = 47;

const UI_SET_EVBIT: u32 = 0x4004_5564;
const UI_SET_KEYBIT: u32 = 0x4004_5565;
const UI_DEV_SETUP: u32 = 0x405c_5503;
const UI_DEV_CREATE: u32 = 0x5501;
const UI_DEV_DESTROY: u32 = 0x5502;

const BUS_USB: u16 = 0x03;
const DEVICE_NAME: &[u8] = b"kaomoji-picker-paste";

/// Time for the compositor to pick up a freshly created device
const DEVICE_SETTLE_MS: u64 = 100;
/// Gap between key transitions
const KEY_GAP_MS: u64 = 30;

#[repr(C)]
struct UinputSetup {
    /// bus, vendor, product, version
    id: [u16; 4],
    name: [u8; 80],
    ff_effects_max: u32,
}

/// One `struct input_event`: a zeroed timeval, then type, code, value
fn encode_event(kind: u16, code: u16, value: i32) -> Vec<u8> {
    let time_len = std::mem::size_of::<libc::timeval>();
    let mut event = vec![0u8; time_len + 8];
    event[time_len..time_len + 2].copy_from_slice(&kind.to_ne_bytes());
    event[time_len + 2..time_len + 4].copy_from_slice(&code.to_ne_bytes());
    event[time_len + 4..].copy_from_slice(&value.to_ne_bytes());
    event
}

fn ioctl_failed(what: &str) -> PasteError {
    PasteError::Keystroke(format!("uinput {}: {}", what, std::io::Error::last_os_error()))
}

/// A created uinput device; destroyed on drop
struct VirtualKeyboard {
    device: File,
}

impl VirtualKeyboard {
    fn create() -> Result<Self, PasteError> {
        let device = OpenOptions::new()
            .write(true)
            .open("/dev/uinput")
            .map_err(|e| PasteError::Keystroke(format!("open /dev/uinput: {}", e)))?;
        let fd = device.as_raw_fd();

        let mut setup = UinputSetup {
            id: [BUS_USB, 0x1234, 0x5678, 0x0001],
            name: [0; 80],
            ff_effects_max: 0,
        };
        setup.name[..DEVICE_NAME.len()].copy_from_slice(DEVICE_NAME);

        // SAFETY: `fd` is an open uinput handle for the duration of these
        // calls and `setup` matches the kernel's `struct uinput_setup`.
        unsafe {
            if libc::ioctl(fd, UI_SET_EVBIT as _, libc::c_int::from(EV_KEY)) < 0 {
                return Err(ioctl_failed("enable EV_KEY"));
            }
            for key in [KEY_LEFTCTRL, KEY_V] {
                if libc::ioctl(fd, UI_SET_KEYBIT as _, libc::c_int::from(key)) < 0 {
                    return Err(ioctl_failed("enable key"));
                }
            }
            if libc::ioctl(fd, UI_DEV_SETUP as _, &setup as *const UinputSetup) < 0 {
                return Err(ioctl_failed("setup"));
            }
            if libc::ioctl(fd, UI_DEV_CREATE as _) < 0 {
                return Err(ioctl_failed("create"));
            }
        }

        std::thread::sleep(Duration::from_millis(DEVICE_SETTLE_MS));
        Ok(Self { device })
    }

    /// Key transition followed by a sync report
    fn key(&mut self, code: u16, pressed: bool) -> Result<(), PasteError> {
        let write = |device: &mut File, bytes: Vec<u8>| {
            device
                .write_all(&bytes)
                .map_err(|e| PasteError::Keystroke(format!("uinput write: {}", e)))
        };

        write(&mut self.device, encode_event(EV_KEY, code, i32::from(pressed)))?;
        write(&mut self.device, encode_event(EV_SYN, SYN_REPORT, 0))?;
        self.device
            .flush()
            .map_err(|e| PasteError::Keystroke(format!("uinput flush: {}", e)))?;

        std::thread::sleep(Duration::from_millis(KEY_GAP_MS));
        Ok(())
    }
}

impl Drop for VirtualKeyboard {
    fn drop(&mut self) {
        // SAFETY: the device is still open and was created in `create`.
        unsafe {
            libc::ioctl(self.device.as_raw_fd(), UI_DEV_DESTROY as _);
        }
    }
}

/// Ctrl down, V down, V up, Ctrl up
pub fn send_paste_shortcut() -> Result<(), PasteError> {
    let mut keyboard = VirtualKeyboard::create()?;

    keyboard.key(KEY_LEFTCTRL, true)?;
    let sent = keyboard
        .key(KEY_V, true)
        .and_then(|()| keyboard.key(KEY_V, false));
    // Never leave Ctrl held down
    keyboard.key(KEY_LEFTCTRL, false)?;
    sent?;

    // Let the events drain before the device goes away
    std::thread::sleep(Duration::from_millis(DEVICE_SETTLE_MS));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_layout() {
        let time_len = std::mem::size_of::<libc::timeval>();
        let event = encode_event(EV_KEY, KEY_V, 1);

        assert_eq!(event.len(), time_len + 8);
        assert!(event[..time_len].iter().all(|b| *b == 0));
        assert_eq!(&event[time_len..time_len + 2], &EV_KEY.to_ne_bytes());
        assert_eq!(&event[time_len + 2..time_len + 4], &KEY_V.to_ne_bytes());
        assert_eq!(&event[time_len + 4..], &1i32.to_ne_bytes());
    }

    #[test]
    fn test_sync_event_is_all_zero_payload() {
        let event = encode_event(EV_SYN, SYN_REPORT, 0);
        assert!(event.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_setup_struct_matches_kernel_size() {
        // struct uinput_setup { struct input_id id; char name[80]; __u32 ff_effects_max; }
        assert_eq!(std::mem::size_of::<UinputSetup>(), 92);
        assert_eq!(UI_DEV_SETUP >> 16 & 0x3fff, 92);
    }
}
