use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::json;

use crate::models::{Asset, AssetType};
use crate::pipeline::generator::ContentBundle;
use crate::pipeline::resolver::VideoAnalysis;

/// Clip windows in seconds, applied regardless of the actual video length.
const CLIP_WINDOWS: [(u32, u32); 3] = [(0, 30), (30, 90), (120, 180)];

/// Rotating palette for quote graphics (hex, no leading `#`).
const PALETTE: [(&str, &str); 5] = [
    ("3b82f6", "blue"),
    ("10b981", "green"),
    ("f59e0b", "yellow"),
    ("ef4444", "red"),
    ("8b5cf6", "purple"),
];

const IMAGE_TEXT_COLOR: &str = "ffffff";
const IMAGE_DIMENSIONS: &str = "1080x1080";

/// Package the generated bundle into a flat ordered asset list: one blog,
/// the LinkedIn posts, the tweets, three clip references, and one image per
/// quote. Asset ids are unique within the project by construction
/// (`asset_{project_id}_{index}`).
pub fn assemble(
    project_id: &str,
    analysis: &VideoAnalysis,
    bundle: &ContentBundle,
    created_at: DateTime<Utc>,
) -> Vec<Asset> {
    let mut assets = Vec::new();
    let mut index = 0;
    let mut next_index = || {
        let current = index;
        index += 1;
        current
    };

    assets.push(Asset::text(
        project_id,
        next_index(),
        AssetType::Blog,
        bundle.blog_post.clone(),
        json!({
            "word_count": bundle.blog_post.split_whitespace().count(),
            "reading_time_minutes": bundle.reading_time_mins,
            "category": analysis.category.as_str(),
            "source": analysis.source.as_str(),
        }),
        created_at,
    ));

    for (i, post) in bundle.linkedin_posts.iter().enumerate() {
        assets.push(Asset::text(
            project_id,
            next_index(),
            AssetType::LinkedinPost,
            post.content.clone(),
            json!({
                "post_number": i + 1,
                "character_count": post.content.chars().count(),
                "hashtags": post.hashtags,
            }),
            created_at,
        ));
    }

    for (i, tweet) in bundle.tweets.iter().enumerate() {
        assets.push(Asset::text(
            project_id,
            next_index(),
            AssetType::Tweet,
            tweet.content.clone(),
            json!({
                "tweet_number": i + 1,
                "character_count": tweet.content.chars().count(),
                "hashtags": tweet.hashtags,
            }),
            created_at,
        ));
    }

    for (i, (start, end)) in CLIP_WINDOWS.iter().enumerate() {
        let file_url = format!(
            "https://www.youtube.com/embed/{}?start={}&end={}",
            analysis.video_id, start, end
        );
        assets.push(Asset::media(
            project_id,
            next_index(),
            AssetType::VideoClip,
            file_url,
            json!({
                "clip_number": i + 1,
                "start_time": start,
                "end_time": end,
                "duration": end - start,
                "aspect_ratio": "9:16",
                "description": format!("Highlight clip {} from \"{}\"", i + 1, analysis.title),
            }),
            created_at,
        ));
    }

    for (i, quote) in bundle.quotes.iter().enumerate() {
        let (background, color_name) = PALETTE[i % PALETTE.len()];
        let encoded = utf8_percent_encode(quote, NON_ALPHANUMERIC).to_string();
        // Alternate placeholder services for variety in the rendered set.
        let file_url = if i % 2 == 0 {
            format!(
                "https://via.placeholder.com/{}/{}/{}?text={}",
                IMAGE_DIMENSIONS, background, IMAGE_TEXT_COLOR, encoded
            )
        } else {
            format!(
                "https://dummyimage.com/{}/{}/{}&text={}",
                IMAGE_DIMENSIONS, background, IMAGE_TEXT_COLOR, encoded
            )
        };
        assets.push(Asset::media(
            project_id,
            next_index(),
            AssetType::Image,
            file_url,
            json!({
                "quote_number": i + 1,
                "quote_text": quote,
                "format": "square",
                "dimensions": IMAGE_DIMENSIONS,
                "background": format!("#{}", background),
                "color": color_name,
            }),
            created_at,
        ));
    }

    assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::generator::generate;
    use crate::pipeline::resolver::synthesized_analysis;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn assembled() -> (VideoAnalysis, Vec<Asset>) {
        let analysis = synthesized_analysis("vid123", "https://youtu.be/vid123");
        let bundle = generate(&analysis, &mut StdRng::seed_from_u64(1));
        let assets = assemble("project_9", &analysis, &bundle, Utc::now());
        (analysis, assets)
    }

    #[test]
    fn asset_ids_are_unique_and_stamped_with_project_id() {
        let (_, assets) = assembled();
        let ids: HashSet<_> = assets.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids.len(), assets.len());
        assert!(assets.iter().all(|a| a.project_id == "project_9"));
        assert!(assets.iter().all(|a| a.id.starts_with("asset_project_9_")));
    }

    #[test]
    fn assembly_order_and_counts() {
        let (_, assets) = assembled();
        let blogs: Vec<_> = assets
            .iter()
            .filter(|a| a.asset_type == AssetType::Blog)
            .collect();
        assert_eq!(blogs.len(), 1);
        assert_eq!(assets[0].asset_type, AssetType::Blog);
        assert_eq!(
            assets
                .iter()
                .filter(|a| a.asset_type == AssetType::LinkedinPost)
                .count(),
            3
        );
        assert_eq!(
            assets
                .iter()
                .filter(|a| a.asset_type == AssetType::Tweet)
                .count(),
            3
        );
        assert_eq!(
            assets
                .iter()
                .filter(|a| a.asset_type == AssetType::VideoClip)
                .count(),
            3
        );
        assert!(assets.len() >= 4);
    }

    #[test]
    fn clip_urls_use_fixed_windows() {
        let (analysis, assets) = assembled();
        let clips: Vec<_> = assets
            .iter()
            .filter(|a| a.asset_type == AssetType::VideoClip)
            .collect();
        for (clip, (start, end)) in clips.iter().zip(CLIP_WINDOWS) {
            let url = clip.file_url.as_deref().unwrap();
            assert!(url.contains(&format!("embed/{}", analysis.video_id)));
            assert!(url.contains(&format!("start={}&end={}", start, end)));
            assert_eq!(clip.metadata["duration"], json!(end - start));
        }
    }

    #[test]
    fn image_assets_encode_quotes_and_rotate_palette() {
        let (_, assets) = assembled();
        let images: Vec<_> = assets
            .iter()
            .filter(|a| a.asset_type == AssetType::Image)
            .collect();
        assert!(!images.is_empty());
        for (i, image) in images.iter().enumerate() {
            let url = image.file_url.as_deref().unwrap();
            assert!(url.contains("1080x1080"));
            assert!(url.contains(PALETTE[i % PALETTE.len()].0));
            // Quote text is URL-encoded, so spaces never appear raw.
            assert!(!url.contains(' '));
            assert!(image.metadata["quote_text"].is_string());
        }
    }

    #[test]
    fn text_and_media_fields_match_asset_type() {
        let (_, assets) = assembled();
        for asset in assets {
            match asset.asset_type {
                AssetType::Blog | AssetType::LinkedinPost | AssetType::Tweet => {
                    assert!(asset.content.is_some());
                    assert!(asset.file_url.is_none());
                }
                AssetType::VideoClip | AssetType::Image => {
                    assert!(asset.content.is_none());
                    assert!(asset.file_url.is_some());
                }
            }
        }
    }
}
