//! Per-asset configuration fragment schemas
//!
//! A fragment file is a single YAML mapping from one asset name to the flat
//! field set of its category. The merge step is textual, so these types
//! only surface schema drift as warnings before fragments are concatenated.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::category::Category;

/// Sprite sheet properties (textures category)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteProperties {
    pub frames: Option<i32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub transparent: Option<bool>,
    pub smooth: Option<bool>,
    pub preload: Option<bool>,
    pub speed_type: Option<u32>,
    pub frame_speed: Option<f32>,
    pub bounding_box_type: Option<u32>,
    pub bbox_left: Option<i32>,
    pub bbox_right: Option<i32>,
    pub bbox_bottom: Option<i32>,
    pub bbox_top: Option<i32>,
    pub sepmasks: Option<u32>,
}

/// Background tile sheet properties
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundProperties {
    pub tile_count: Option<u32>,
    pub tile_width: Option<u32>,
    pub tile_height: Option<u32>,
    pub border_x: Option<u32>,
    pub border_y: Option<u32>,
    pub tile_column: Option<u32>,
    pub item_per_tile: Option<u32>,
    pub transparent: Option<bool>,
    pub smooth: Option<bool>,
    pub preload: Option<bool>,
    pub frametime: Option<i64>,
}

/// Audio entry properties
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioProperties {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub embedded: Option<bool>,
    pub compressed: Option<bool>,
    pub effects: Option<u32>,
    pub volume: Option<f32>,
    pub pitch: Option<f32>,
    pub audiogroup_index: Option<i32>,
    pub audiofile_id: Option<i32>,
    pub preload: Option<bool>,
}

/// One asset's properties, tagged by category
#[derive(Debug, Clone, PartialEq)]
pub enum AssetProperties {
    Sprite(SpriteProperties),
    Background(BackgroundProperties),
    Audio(AudioProperties),
}

/// Parse a fragment document against its category's schema.
pub fn parse_fragment(
    category: Category,
    text: &str,
) -> Result<BTreeMap<String, AssetProperties>, serde_yaml_ng::Error> {
    match category {
        Category::Textures => Ok(serde_yaml_ng::from_str::<BTreeMap<String, SpriteProperties>>(text)?
            .into_iter()
            .map(|(name, props)| (name, AssetProperties::Sprite(props)))
            .collect()),
        Category::Backgrounds => Ok(serde_yaml_ng::from_str::<
            BTreeMap<String, BackgroundProperties>,
        >(text)?
        .into_iter()
        .map(|(name, props)| (name, AssetProperties::Background(props)))
        .collect()),
        Category::Audio => Ok(serde_yaml_ng::from_str::<BTreeMap<String, AudioProperties>>(text)?
            .into_iter()
            .map(|(name, props)| (name, AssetProperties::Audio(props)))
            .collect()),
    }
}
