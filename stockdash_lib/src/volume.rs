//! Volume bucketing for the volume bar view.
//!
//! Each bar is classified against the average of the series' non-zero
//! volumes, so days without trading data do not drag the average down.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_volume;
use crate::series::IndicatorPoint;

/// Multiple of the average above which a bar counts as high volume.
pub const HIGH_VOLUME_FACTOR: f64 = 1.5;

/// Presentation bucket for one volume bar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VolumeClass {
    /// No volume reported.
    Zero,
    /// More than 1.5x the average.
    High,
    /// Above the average.
    AboveAverage,
    /// At or below the average.
    BelowAverage,
}

impl std::fmt::Display for VolumeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VolumeClass::Zero => "zero",
                VolumeClass::High => "high",
                VolumeClass::AboveAverage => "above-average",
                VolumeClass::BelowAverage => "below-average",
            }
        )
    }
}

/// Mean of the non-zero volumes; 0 when every volume is zero.
pub fn average_volume(points: &[IndicatorPoint]) -> f64 {
    let (sum, count) = points
        .iter()
        .filter(|p| p.volume > 0)
        .fold((0.0, 0usize), |(sum, count), p| (sum + p.volume as f64, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn classify_volume(volume: u64, average: f64) -> VolumeClass {
    let v = volume as f64;
    if volume == 0 {
        VolumeClass::Zero
    } else if v > average * HIGH_VOLUME_FACTOR {
        VolumeClass::High
    } else if v > average {
        VolumeClass::AboveAverage
    } else {
        VolumeClass::BelowAverage
    }
}

/// One classified bar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VolumeBar {
    pub date: NaiveDate,
    pub volume: u64,
    pub label: String,
    pub class: VolumeClass,
}

/// Classified bars plus the average reference line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VolumeProfile {
    pub average: f64,
    /// Reference-line caption, e.g. `Avg: 55.12M`.
    pub average_label: String,
    pub bars: Vec<VolumeBar>,
}

impl VolumeProfile {
    pub fn count(&self, class: VolumeClass) -> usize {
        self.bars.iter().filter(|b| b.class == class).count()
    }
}

pub fn volume_profile(points: &[IndicatorPoint]) -> VolumeProfile {
    let average = average_volume(points);
    let bars = points
        .iter()
        .map(|p| VolumeBar {
            date: p.date,
            volume: p.volume,
            label: format_volume(p.volume as f64),
            class: classify_volume(p.volume, average),
        })
        .collect();

    VolumeProfile {
        average,
        average_label: format!("Avg: {}", format_volume(average)),
        bars,
    }
}
