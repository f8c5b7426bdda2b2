pub(crate) use crate::application::{FaceIndex, WatchFace};

pub(crate) use crate::application::face_manager::Signal;
pub(crate) use crate::system::display::{LcdType, Position, SegmentDisplay};
pub(crate) use crate::system::input::{Event, EventKind};
pub(crate) use crate::system::{Host, Movement, System};
