//! Output device discovery via cpal.

use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Device, Host};

/// Extract device name via `description()` (cpal 0.17+).
pub(crate) fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Output device information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    /// Position in the host's output device list.
    pub index: usize,
    /// Human-readable device name.
    pub name: String,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
    /// Default channel count.
    pub channels: u16,
}

fn describe(index: usize, device: &Device) -> Option<AudioDevice> {
    let name = device_name(device).ok()?;
    let config = device.default_output_config().ok();
    Some(AudioDevice {
        index,
        name,
        default_sample_rate: config.as_ref().map_or(44100, |c| c.sample_rate()),
        channels: config.as_ref().map_or(2, |c| c.channels()),
    })
}

/// List all output devices on the default host.
///
/// Devices whose name cannot be read are skipped.
pub fn list_output_devices() -> Result<Vec<AudioDevice>> {
    let host = cpal::default_host();
    let devices = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?;

    Ok(devices
        .enumerate()
        .filter_map(|(i, d)| describe(i, &d))
        .collect())
}

/// The default output device, if the host has one.
pub fn default_output_device() -> Result<Option<AudioDevice>> {
    let host = cpal::default_host();
    let Some(default) = host.default_output_device() else {
        return Ok(None);
    };
    let Ok(name) = device_name(&default) else {
        return Ok(None);
    };

    let listed = list_output_devices()?;
    Ok(listed
        .into_iter()
        .find(|d| d.name == name)
        .or_else(|| describe(0, &default)))
}

/// Resolve an output device by index, exact name, or partial name.
///
/// `None` selects the host default.
pub(crate) fn open_output_device(host: &Host, name_or_index: Option<&str>) -> Result<Device> {
    match name_or_index {
        None => host.default_output_device().ok_or(Error::NoDevice),
        Some(query) => {
            let devices: Vec<_> = host
                .output_devices()
                .map_err(|e| Error::Stream(e.to_string()))?
                .collect();
            let names: Vec<Option<String>> =
                devices.iter().map(|d| device_name(d).ok()).collect();
            let index = select_device(&names, query)?;
            Ok(devices[index].clone())
        }
    }
}

/// Pick a device position from a list of names.
///
/// Tries a numeric index first, then an exact name, then a case-insensitive
/// substring. Several substring matches resolve to the first one.
fn select_device(names: &[Option<String>], query: &str) -> Result<usize> {
    if let Ok(index) = query.parse::<usize>() {
        return if index < names.len() {
            Ok(index)
        } else {
            Err(Error::DeviceNotFound(format!(
                "output device index {} (only {} devices available)",
                index,
                names.len()
            )))
        };
    }

    if let Some(i) = names.iter().position(|n| n.as_deref() == Some(query)) {
        return Ok(i);
    }

    let search_lower = query.to_lowercase();
    let matches: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, n)| {
            n.as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&search_lower))
        })
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [] => Err(Error::DeviceNotFound(format!(
            "no output device matching '{}'",
            query
        ))),
        [only] => Ok(*only),
        [first, ..] => {
            tracing::warn!(
                query,
                candidates = matches.len(),
                "device name is ambiguous, using first match"
            );
            Ok(*first)
        }
    }
}
