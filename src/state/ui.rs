use serde::{Deserialize, Serialize};

/// Top level workspace tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveTab {
    #[default]
    #[serde(rename = "txt2img")]
    TextToImage,
    #[serde(rename = "img2img")]
    ImageToImage,
    #[serde(rename = "unifiedCanvas")]
    UnifiedCanvas,
    #[serde(rename = "nodes")]
    Nodes,
    #[serde(rename = "postprocess")]
    Postprocessing,
    #[serde(rename = "training")]
    Training,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 6] = [
        ActiveTab::TextToImage,
        ActiveTab::ImageToImage,
        ActiveTab::UnifiedCanvas,
        ActiveTab::Nodes,
        ActiveTab::Postprocessing,
        ActiveTab::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::TextToImage => "txt2img",
            ActiveTab::ImageToImage => "img2img",
            ActiveTab::UnifiedCanvas => "unifiedCanvas",
            ActiveTab::Nodes => "nodes",
            ActiveTab::Postprocessing => "postprocess",
            ActiveTab::Training => "training",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ActiveTab::TextToImage => "common:text2img",
            ActiveTab::ImageToImage => "common:img2img",
            ActiveTab::UnifiedCanvas => "common:unifiedCanvas",
            ActiveTab::Nodes => "common:nodes",
            ActiveTab::Postprocessing => "common:postProcessing",
            ActiveTab::Training => "common:training",
        }
    }
}

/// Layout slice of the application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: ActiveTab,
}
