//! Declarative transform catalog
//!
//! The known transform steps and their option vocabulary as one static
//! table, so adding a server-side transform is a data change, not a new
//! type. The builder never consults this table; [`check`] is an advisory
//! lint a caller can run before shipping a pipeline, and unknown step names
//! pass unchallenged so newer server transforms keep working.

use super::error::TransformError;
use super::step::Transform;
use super::value::OptionValue;

/// The kind of value an option accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Int,
    Float,
    Str,
    Color,
    Symbol,
    List,
    /// Accepts any value kind (e.g. `rotate`'s `deg`, which takes a degree
    /// count or the `exif` symbol)
    Any,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Bool => "boolean",
            OptionKind::Int => "integer",
            OptionKind::Float => "float",
            OptionKind::Str => "string",
            OptionKind::Color => "color",
            OptionKind::Symbol => "symbol",
            OptionKind::List => "list",
            OptionKind::Any => "any",
        }
    }

    /// Whether a concrete value satisfies this kind. Deliberately lenient at
    /// the seams: integers satisfy float options, strings satisfy symbol and
    /// color options (pre-rendered hex), and `Raw` satisfies everything.
    fn admits(&self, value: &OptionValue) -> bool {
        if matches!(value, OptionValue::Raw(_)) {
            return true;
        }

        match self {
            OptionKind::Bool => matches!(value, OptionValue::Bool(_)),
            OptionKind::Int => matches!(value, OptionValue::Int(_)),
            OptionKind::Float => matches!(value, OptionValue::Float(_) | OptionValue::Int(_)),
            OptionKind::Str => matches!(value, OptionValue::Str(_) | OptionValue::Symbol(_)),
            OptionKind::Color => matches!(value, OptionValue::Color(_) | OptionValue::Str(_)),
            OptionKind::Symbol => matches!(value, OptionValue::Symbol(_) | OptionValue::Str(_)),
            OptionKind::List => matches!(value, OptionValue::List(_)),
            OptionKind::Any => true,
        }
    }
}

/// One allowed option of a step
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
}

/// One known transform step and its option vocabulary
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub name: &'static str,
    pub options: &'static [OptionSpec],
}

const fn opt(name: &'static str, kind: OptionKind) -> OptionSpec {
    OptionSpec { name, kind }
}

/// The known steps. Ranges documented by the server (`1...100` etc.) are
/// intentionally absent: the encoder transmits faithfully and the server
/// validates.
pub const STEPS: &[StepSpec] = &[
    StepSpec {
        name: "resize",
        options: &[
            opt("width", OptionKind::Int),
            opt("height", OptionKind::Int),
            opt("fit", OptionKind::Symbol),
            opt("align", OptionKind::Symbol),
        ],
    },
    StepSpec {
        name: "border",
        options: &[
            opt("width", OptionKind::Int),
            opt("color", OptionKind::Color),
            opt("background", OptionKind::Color),
        ],
    },
    StepSpec {
        name: "circle",
        options: &[opt("background", OptionKind::Color)],
    },
    StepSpec {
        name: "ascii",
        options: &[
            opt("background", OptionKind::Color),
            opt("foreground", OptionKind::Color),
            opt("colored", OptionKind::Bool),
            opt("size", OptionKind::Int),
            opt("reverse", OptionKind::Bool),
        ],
    },
    StepSpec {
        name: "collage",
        options: &[
            opt("width", OptionKind::Int),
            opt("height", OptionKind::Int),
            opt("files", OptionKind::List),
            opt("margin", OptionKind::Int),
            opt("color", OptionKind::Color),
            opt("fit", OptionKind::Symbol),
            opt("autorotate", OptionKind::Bool),
        ],
    },
    StepSpec {
        name: "output",
        options: &[
            opt("format", OptionKind::Symbol),
            opt("background", OptionKind::Color),
            opt("page", OptionKind::Int),
            opt("density", OptionKind::Int),
            opt("compress", OptionKind::Bool),
            // quality takes 1...100 or the `input` symbol
            opt("quality", OptionKind::Any),
            opt("strip", OptionKind::Bool),
            opt("colorspace", OptionKind::Symbol),
            opt("secure", OptionKind::Bool),
            opt("docinfo", OptionKind::Bool),
            opt("pageformat", OptionKind::Symbol),
            opt("pageorientation", OptionKind::Symbol),
        ],
    },
    StepSpec {
        name: "detect_faces",
        options: &[
            opt("minsize", OptionKind::Float),
            opt("maxsize", OptionKind::Float),
            opt("color", OptionKind::Color),
            opt("export", OptionKind::Bool),
        ],
    },
    StepSpec {
        name: "partial_blur",
        options: &[
            opt("objects", OptionKind::List),
            opt("amount", OptionKind::Int),
            opt("blur", OptionKind::Float),
            opt("type", OptionKind::Symbol),
        ],
    },
    StepSpec {
        name: "rotate",
        options: &[
            opt("deg", OptionKind::Any),
            opt("exif", OptionKind::Bool),
            opt("background", OptionKind::Color),
        ],
    },
];

/// Looks up a step spec by name.
pub fn step(name: &str) -> Option<&'static StepSpec> {
    STEPS.iter().find(|spec| spec.name == name)
}

/// Checks a transform against the catalog.
///
/// Unknown step names pass. For known steps, every option must be in the
/// step's vocabulary and carry an admissible value kind.
pub fn check(transform: &Transform) -> Result<(), TransformError> {
    let Some(spec) = step(transform.name()) else {
        return Ok(());
    };

    for (key, value) in transform.options() {
        let option = spec
            .options
            .iter()
            .find(|o| o.name == key)
            .ok_or_else(|| TransformError::unknown_option(transform.name(), key.as_str()))?;

        if !option.kind.admits(value) {
            return Err(TransformError::wrong_kind(
                transform.name(),
                key.as_str(),
                option.kind.as_str(),
            ));
        }
    }

    Ok(())
}
