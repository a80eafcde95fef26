//! `<picture>` fragment rendering.
//!
//! Consumes the complete [`ArtifactIndex`] for one source file and renders
//! the responsive markup with [Maud](https://maud.lambda.xyz/). The
//! selection rules live in plain Rust so they are directly testable:
//!
//! - Every group except the last becomes a `<source>` listing its artifacts
//!   density-ascending (`path`, `path 2x`, …).
//! - Groups *before* the trailing same-width run additionally carry
//!   `media="(min-width: {width}px)"` — the group's own requested width is
//!   the breakpoint. The largest width's sources carry no `media` so one of
//!   them always matches.
//! - The last group (largest width, last codec) becomes the sole fallback
//!   `<img>`: `src` from its density-1 artifact, higher densities in
//!   `srcset`, `width` from the requested width, empty `alt` (no text source
//!   exists at this layer).

use crate::artifact::{ArtifactGroup, ArtifactIndex};
use maud::{Markup, html};

/// Start of the trailing run of groups sharing the final group's width.
///
/// Scans backward from the end; with photographic sources this is the WebP
/// group of the largest width (its JPEG sibling is the last group).
fn last_width_run_start(groups: &[ArtifactGroup]) -> usize {
    let last_width = groups[groups.len() - 1].width;
    let mut start = groups.len() - 1;
    while start > 0 && groups[start - 1].width == last_width {
        start -= 1;
    }
    start
}

/// Comma-separated srcset of every artifact in the group, density-ascending.
/// Density 1 has no descriptor, matching how browsers default it.
fn srcset_all(group: &ArtifactGroup) -> String {
    group
        .artifacts
        .iter()
        .map(|a| {
            if a.spec.density == 1 {
                a.url_path.clone()
            } else {
                format!("{} {}x", a.url_path, a.spec.density)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// srcset of only the density ≥ 2 artifacts, for the fallback `<img>`.
fn srcset_high_density(group: &ArtifactGroup) -> String {
    group
        .artifacts
        .iter()
        .filter(|a| a.spec.density > 1)
        .map(|a| format!("{} {}x", a.url_path, a.spec.density))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the `<picture>` fragment for one source file.
///
/// The index must be non-empty; the orchestrator only calls this after every
/// artifact of the file has been written.
pub fn render_picture(index: &ArtifactIndex) -> Markup {
    let groups = index.groups();
    debug_assert!(!groups.is_empty(), "markup requested for empty index");

    let last = groups.len() - 1;
    let run_start = last_width_run_start(groups);

    html! {
        picture {
            @for (i, group) in groups.iter().enumerate() {
                @if i != last {
                    @let media = (i < run_start)
                        .then(|| format!("(min-width: {}px)", group.width));
                    source media=[media]
                        type={ "image/" (group.codec.mime_subtype()) }
                        srcset=(srcset_all(group));
                } @else {
                    @let extra = (group.artifacts.len() > 1)
                        .then(|| srcset_high_density(group));
                    img src=(group.artifacts[0].url_path)
                        srcset=[extra]
                        alt=""
                        width=(group.width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{Codec, OutputArtifact, VariantSpec};

    fn group(codec: Codec, width: u32, densities: u32) -> ArtifactGroup {
        let artifacts = (1..=densities)
            .map(|density| {
                let spec = VariantSpec { width, density };
                OutputArtifact {
                    codec,
                    spec,
                    url_path: format!("/img/photo/{}.{}", spec.file_stem(), codec.extension()),
                }
            })
            .collect();
        ArtifactGroup {
            codec,
            width,
            artifacts,
        }
    }

    fn photo_index(widths: &[u32], densities: u32) -> ArtifactIndex {
        let mut index = ArtifactIndex::new();
        for &width in widths {
            index.push(group(Codec::WebP, width, densities));
            index.push(group(Codec::Jpeg, width, densities));
        }
        index
    }

    #[test]
    fn source_count_is_groups_minus_one() {
        let index = photo_index(&[288, 576], 2);
        let html = render_picture(&index).into_string();
        assert_eq!(html.matches("<source").count(), 3);
        assert_eq!(html.matches("<img").count(), 1);
    }

    #[test]
    fn fallback_img_is_largest_width_last_codec() {
        let index = photo_index(&[288, 576], 2);
        let html = render_picture(&index).into_string();
        assert!(html.contains(r#"src="/img/photo/576w1d.jpg""#));
        assert!(html.contains(r#"srcset="/img/photo/576w2d.jpg 2x""#));
        assert!(html.contains(r#"width="576""#));
        assert!(html.contains(r#"alt="""#));
    }

    #[test]
    fn media_attribute_only_before_last_width_run() {
        let index = photo_index(&[288, 576], 1);
        let html = render_picture(&index).into_string();
        // 288 webp + 288 jpeg carry the breakpoint, 576 webp does not.
        assert_eq!(html.matches(r#"media="(min-width: 288px)""#).count(), 2);
        assert!(!html.contains(r#"media="(min-width: 576px)""#));
    }

    #[test]
    fn srcset_lists_densities_ascending_with_descriptors() {
        let index = photo_index(&[288], 3);
        let html = render_picture(&index).into_string();
        assert!(html.contains(
            "srcset=\"/img/photo/288w1d.webp, /img/photo/288w2d.webp 2x, /img/photo/288w3d.webp 3x\""
        ));
    }

    #[test]
    fn source_type_names_the_codec() {
        let index = photo_index(&[288, 576], 1);
        let html = render_picture(&index).into_string();
        assert!(html.contains(r#"type="image/webp""#));
        assert!(html.contains(r#"type="image/jpeg""#));
    }

    #[test]
    fn single_png_group_renders_img_only() {
        let mut index = ArtifactIndex::new();
        index.push(group(Codec::Png, 100, 1));
        let html = render_picture(&index).into_string();
        assert!(!html.contains("<source"));
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"src="/img/photo/100w1d.png""#));
        assert!(!html.contains("srcset"));
    }

    #[test]
    fn density_one_fallback_has_no_srcset() {
        let index = photo_index(&[288], 1);
        let html = render_picture(&index).into_string();
        let img_tag = &html[html.find("<img").unwrap()..];
        assert!(!img_tag.contains("srcset"));
    }

    #[test]
    fn fragment_is_wrapped_in_picture() {
        let index = photo_index(&[288], 1);
        let html = render_picture(&index).into_string();
        assert!(html.starts_with("<picture>"));
        assert!(html.ends_with("</picture>"));
    }

    #[test]
    fn run_start_spans_all_codecs_of_last_width() {
        let groups: Vec<ArtifactGroup> = vec![
            group(Codec::WebP, 288, 1),
            group(Codec::Jpeg, 288, 1),
            group(Codec::WebP, 576, 1),
            group(Codec::Jpeg, 576, 1),
        ];
        assert_eq!(last_width_run_start(&groups), 2);
    }

    #[test]
    fn run_start_is_zero_for_single_width() {
        let groups = vec![group(Codec::WebP, 288, 2), group(Codec::Jpeg, 288, 2)];
        assert_eq!(last_width_run_start(&groups), 0);
    }
}
