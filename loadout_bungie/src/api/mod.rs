mod types;

pub use types::{
    ComponentType, DestinyMembership, EXPORT_COMPONENTS, PlatformEnvelope, UserMemberships,
};
