//! Enumerated attribute values.
//!
//! Every keyword-valued attribute has its own enum. Parsing from a string
//! goes through an [`EnumValidator`] built from the same variant table, so
//! error messages always list exactly the accepted spellings.

use std::fmt;
use std::str::FromStr;

use crate::message::{error::ValidationError, validation::EnumValidator};

/// A keyword-valued attribute.
pub trait Keyword: Copy + fmt::Debug + 'static {
    /// Canonical schema name of the attribute, used in error messages.
    const FIELD: &'static str;

    /// Returns the wire spelling of this value.
    fn as_str(self) -> &'static str;
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            const VALIDATOR: EnumValidator = EnumValidator::new(&[$($text),+]);
        }

        impl Keyword for $name {
            const FIELD: &'static str = $field;

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::VALIDATOR.validate($field, Some(value))?;
                match value {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err(Self::VALIDATOR.rejection($field, value)),
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::try_from(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Direction in which a box arranges its children.
    #[derive(Default)]
    BoxLayout, field = "layout" {
        /// Children placed side by side.
        #[default]
        Horizontal => "horizontal",
        /// Children stacked top to bottom.
        Vertical => "vertical",
        /// Children side by side, aligned on a shared text baseline.
        Baseline => "baseline",
    }
}

keyword_enum! {
    /// Positioning scheme for a component.
    Position, field = "position" {
        /// Offsets are relative to the component's normal position.
        Relative => "relative",
        /// Offsets are relative to the parent box.
        Absolute => "absolute",
    }
}

keyword_enum! {
    /// Horizontal alignment inside the available space.
    Align, field = "align" {
        /// Leading edge.
        Start => "start",
        /// Trailing edge.
        End => "end",
        /// Centred.
        Center => "center",
    }
}

keyword_enum! {
    /// Vertical alignment inside the available space.
    Gravity, field = "gravity" {
        /// Top edge.
        Top => "top",
        /// Bottom edge.
        Bottom => "bottom",
        /// Centred.
        Center => "center",
    }
}

keyword_enum! {
    /// Font weight of text and spans.
    FontWeight, field = "weight" {
        /// Normal weight.
        Regular => "regular",
        /// Bold weight.
        Bold => "bold",
    }
}

keyword_enum! {
    /// Font style of text and spans.
    FontStyle, field = "style" {
        /// Upright.
        Normal => "normal",
        /// Italic.
        Italic => "italic",
    }
}

keyword_enum! {
    /// Line decoration of text and spans.
    Decoration, field = "decoration" {
        /// No decoration.
        None => "none",
        /// Underlined.
        Underline => "underline",
        /// Struck through.
        LineThrough => "line-through",
    }
}

keyword_enum! {
    /// Automatic font shrinking.
    AdjustMode, field = "adjustMode" {
        /// Shrink the font until the content fits.
        ShrinkToFit => "shrink-to-fit",
    }
}

keyword_enum! {
    /// Visual style of a button.
    #[derive(Default)]
    ButtonStyle, field = "style" {
        /// Filled with the accent colour.
        Primary => "primary",
        /// Filled with a neutral colour.
        Secondary => "secondary",
        /// Rendered as a plain link.
        #[default]
        Link => "link",
    }
}

keyword_enum! {
    /// Height of a button.
    #[derive(Default)]
    ButtonHeight, field = "height" {
        /// Small.
        Sm => "sm",
        /// Medium.
        #[default]
        Md => "md",
    }
}

keyword_enum! {
    /// How an image fills its drawing area.
    AspectMode, field = "aspectMode" {
        /// Scale to fit entirely inside the area.
        Fit => "fit",
        /// Scale to cover the area, cropping overflow.
        Cover => "cover",
    }
}

keyword_enum! {
    /// Width class of a bubble.
    BubbleSize, field = "size" {
        /// Narrowest.
        Nano => "nano",
        /// Micro.
        Micro => "micro",
        /// Deca.
        Deca => "deca",
        /// Hecto.
        Hecto => "hecto",
        /// Kilo.
        Kilo => "kilo",
        /// Mega, the platform default.
        Mega => "mega",
        /// Widest.
        Giga => "giga",
    }
}

keyword_enum! {
    /// Text direction of a bubble.
    Direction, field = "direction" {
        /// Left to right.
        Ltr => "ltr",
        /// Right to left.
        Rtl => "rtl",
    }
}

keyword_enum! {
    /// Distribution of free space along a box's main axis.
    JustifyContent, field = "justifyContent" {
        /// Packed at the start.
        FlexStart => "flex-start",
        /// Packed in the centre.
        Center => "center",
        /// Packed at the end.
        FlexEnd => "flex-end",
        /// Even gaps between children.
        SpaceBetween => "space-between",
        /// Even gaps around children.
        SpaceAround => "space-around",
        /// Even gaps between and around children.
        SpaceEvenly => "space-evenly",
    }
}

keyword_enum! {
    /// Alignment of children along a box's cross axis.
    AlignItems, field = "alignItems" {
        /// Aligned to the start.
        FlexStart => "flex-start",
        /// Centred.
        Center => "center",
        /// Aligned to the end.
        FlexEnd => "flex-end",
    }
}
