use clap::ValueEnum;

use crate::input::InputFormat;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum InputFormatFlag {
    Auto,
    Delimited,
    Json,
}

impl InputFormatFlag {
    pub(crate) const fn as_domain(self) -> InputFormat {
        match self {
            InputFormatFlag::Auto => InputFormat::Auto,
            InputFormatFlag::Delimited => InputFormat::Delimited,
            InputFormatFlag::Json => InputFormat::Json,
        }
    }
}
