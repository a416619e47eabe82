/// Marker trait for intents.
///
/// An intent is either something the user asked for (pick a region, type
/// a search, flip a page) or a completion reported by the loader.
pub trait Intent: Send + 'static {}
