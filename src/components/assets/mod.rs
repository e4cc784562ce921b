mod assets_panel;
mod asset_item;

pub use assets_panel::AssetsPanelContent;
pub use asset_item::AssetItem;
pub(crate) use asset_item::{kind_accent, kind_icon};
