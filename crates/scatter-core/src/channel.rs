// File: crates/scatter-core/src/channel.rs
// Summary: Visual channels, mappable attributes, and the channel -> attribute mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Visual property a numeric attribute can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    X,
    Y,
    Size,
    Opacity,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::X, Channel::Y, Channel::Size, Channel::Opacity];

    pub const fn name(self) -> &'static str {
        match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::Size => "size",
            Channel::Opacity => "opacity",
        }
    }

    /// Id of the select control driving this channel.
    pub const fn control_id(self) -> &'static str {
        match self {
            Channel::X => "select-x",
            Channel::Y => "select-y",
            Channel::Size => "select-size",
            Channel::Opacity => "select-opacity",
        }
    }

    pub fn from_control_id(id: &str) -> Option<Channel> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Channel::ALL.into_iter().find(|c| c.control_id() == id)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric record attribute that can be mapped onto a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Year,
    Price,
    Frequency,
    Lithography,
}

impl Attribute {
    /// Option order of the select controls.
    pub const ALL: [Attribute; 4] = [
        Attribute::Year,
        Attribute::Price,
        Attribute::Frequency,
        Attribute::Lithography,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Year => "Year",
            Attribute::Price => "Price",
            Attribute::Frequency => "Frequency",
            Attribute::Lithography => "Lithography",
        }
    }

    /// Unit suffix appended to axis labels.
    pub const fn unit(self) -> &'static str {
        match self {
            Attribute::Year => "",
            Attribute::Price => " ($)",
            Attribute::Frequency => " (GHz)",
            Attribute::Lithography => " (nm)",
        }
    }

    pub fn axis_label(self) -> String {
        format!("{}{}", self.name(), self.unit())
    }

    /// Next attribute in option order, wrapping around.
    pub fn next(self) -> Attribute {
        let i = Attribute::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Attribute::ALL[(i + 1) % Attribute::ALL.len()]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownAttribute(s.to_string()))
    }
}

/// Option values shown by every select control.
pub fn select_options() -> Vec<&'static str> {
    Attribute::ALL.iter().map(|a| a.name()).collect()
}

/// Which attribute is currently bound to which channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMapping {
    pub x: Attribute,
    pub y: Attribute,
    pub size: Attribute,
    pub opacity: Attribute,
}

impl ChannelMapping {
    pub fn get(&self, channel: Channel) -> Attribute {
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
            Channel::Size => self.size,
            Channel::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, channel: Channel, attribute: Attribute) {
        match channel {
            Channel::X => self.x = attribute,
            Channel::Y => self.y = attribute,
            Channel::Size => self.size = attribute,
            Channel::Opacity => self.opacity = attribute,
        }
    }
}

impl Default for ChannelMapping {
    fn default() -> Self {
        Self {
            x: Attribute::Year,
            y: Attribute::Price,
            size: Attribute::Frequency,
            opacity: Attribute::Lithography,
        }
    }
}
