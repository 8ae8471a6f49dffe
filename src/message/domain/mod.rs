//! Domain types for the message component tree.
//!
//! Nodes are plain owned structs assembled depth-first: each construction
//! block finishes before its parent continues, and a finished tree is only
//! ever read. Attribute values are validated as they are set; structural
//! rules (required fields, container sizes) are checked on serialization.

pub mod action;
pub mod attributes;
pub mod bubble;
pub mod button;
pub mod carousel;
pub mod collection;
pub mod config;
pub mod context;
pub mod flex_box;
pub mod groups;
pub mod image;
pub mod keyword;
pub mod message;
pub mod quick_reply;
pub mod separator;
pub mod text;

pub use action::{Action, MessageAction, PostbackAction, UriAction};
pub use attributes::{Attributes, Configure, Construct};
pub use bubble::{Bubble, Hero};
pub use button::Button;
pub use carousel::Carousel;
pub use collection::{MessageCollection, build};
pub use config::{BuilderConfig, EmptyBoxPolicy};
pub use context::BuildContext;
pub use flex_box::{Component, FlexBox};
pub use groups::{Actionable, FlexChild, ItemLayout, Offsets, Padded, Padding, Positioned};
pub use image::Image;
pub use keyword::{
    AdjustMode, Align, AlignItems, AspectMode, BoxLayout, BubbleSize, ButtonHeight, ButtonStyle,
    Decoration, Direction, FontStyle, FontWeight, Gravity, JustifyContent, Keyword, Position,
};
pub use message::{FlexContents, FlexMessage, Message, TextMessage};
pub use quick_reply::{QuickReply, QuickReplyItem};
pub use separator::Separator;
pub use text::{Span, Text};
