//! Prompt composition rules.
//!
//! Maps a (category, selection) pair to the natural-language instructions
//! sent to the generation service. Every category is a row in a
//! declarative rule table: a template with `{item}` / `{slot}`
//! placeholders plus the commit policy for the resulting candidates.
//! The templates carry the system's only domain knowledge — which
//! attributes each edit is allowed to touch and which are pinned
//! (facial identity, pose, other garments).

use crate::catalog::{Category, SelectionItem, Slot};

/// What happens to a successful candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPolicy {
    /// A single candidate is pushed to history immediately.
    Auto,
    /// Candidates are surfaced for the user to pick one (or cancel).
    Review,
}

/// Which garment a fabric/color texture applies to.
///
/// Textures are ambiguous on their own, so the caller resolves the
/// target before composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureTarget {
    Top,
    Bottom,
    Outfit,
    Headgear,
}

impl TextureTarget {
    /// How the target reads inside an instruction.
    pub fn label(self) -> &'static str {
        match self {
            TextureTarget::Top => "top",
            TextureTarget::Bottom => "bottom",
            TextureTarget::Outfit => "entire outfit",
            TextureTarget::Headgear => "headgear",
        }
    }
}

struct Rule {
    category: Category,
    template: &'static str,
    policy: CommitPolicy,
}

static RULES: &[Rule] = &[
    Rule {
        category: Category::Environment,
        template: "Place the character {item}. IMPORTANT: Adjust the character's pose and \
                   lighting to naturally fit this environment (e.g., if sitting is natural for \
                   the scene, sit). Maintain the current outfit details and facial identity \
                   exactly. Photorealistic.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::Pose,
        template: "Change the character's pose to be {item}. Keep the current outfit and \
                   facial identity exactly the same. Photorealistic.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::HairColor,
        template: "Change the hair color to {item}. CRITICAL: Maintain the exact current \
                   hairstyle, length, volume, and texture. Do not cut or restyle the hair, \
                   only change the pigment to {item}. Photorealistic.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::HairStyle,
        template: "Change the character's hairstyle to {item}. Maintain the current hair \
                   color if possible, and facial identity exactly. Photorealistic.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::Makeup,
        template: "Change the character's makeup to {item}. Maintain facial identity and \
                   realistic skin texture. Photorealistic.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::BodyType,
        template: "Change the character's body structure to be {item}. CRITICAL: Keep the \
                   facial identity, head, and current outfit style/colors exactly the same, \
                   just adjust the fit to the new body shape. Photorealistic.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::Gear,
        template: "Change the person's {slot} to {item}. Maintain facial identity, pose, and \
                   other clothing details exactly as they are. Photorealistic, high quality.",
        policy: CommitPolicy::Auto,
    },
    Rule {
        category: Category::Texture,
        template: "Change the person's {slot} to be {item}. Maintain facial identity, pose, \
                   and style of the garment exactly. Do NOT add any accessories.",
        policy: CommitPolicy::Review,
    },
    Rule {
        category: Category::BatchOutfit,
        template: "Change the character's entire outfit to {item}. Maintain facial identity.",
        policy: CommitPolicy::Review,
    },
    Rule {
        category: Category::Custom,
        template: "Edit this photo: {item}. Maintain facial identity and realistic quality.",
        policy: CommitPolicy::Auto,
    },
];

/// The eight themed outfits produced by a batch wardrobe request.
static BATCH_OUTFIT_THEMES: &[&str] = &[
    "a sophisticated modern business suit, charcoal grey, tailored fit",
    "a trendy oversized streetwear outfit with hoodie and cargo pants",
    "an elegant evening gown or tuxedo, midnight blue, red carpet style",
    "a futuristic cyberpunk outfit with neon accents and techwear",
    "a vintage 90s retro casual outfit with denim jacket and vibrant colors",
    "a bohemian chic outfit with flowy fabrics and earth tones",
    "an avant-garde high fashion sculptural outfit",
    "a minimalist monochrome outfit, clean lines, all white or beige",
];

/// The whole-outfit texture target pins the cut rather than a single
/// garment's style.
static TEXTURE_OUTFIT_TEMPLATE: &str =
    "Change the person's entire outfit to be {item}. Maintain facial identity, pose, and \
     garment cut/style exactly. Do NOT add any accessories.";

static EXPAND_TEMPLATE: &str =
    "Extend the image boundaries to fill the selected aspect ratio (outpainting). Generate \
     new background content seamlessly. IMPORTANT: Keep the main character at the same scale \
     and size; do not zoom out or shrink the character. Just add more environment around them.";

fn rule_for(category: Category) -> &'static Rule {
    // The table covers every Category variant; the lookup cannot miss.
    RULES
        .iter()
        .find(|r| r.category == category)
        .unwrap_or(&RULES[0])
}

fn render(template: &str, item: &str, slot: &str) -> String {
    template.replace("{item}", item).replace("{slot}", slot)
}

/// Commit policy for a category's candidates.
pub fn commit_policy(category: Category) -> CommitPolicy {
    rule_for(category).policy
}

/// Compose the instruction(s) for a category and prompt fragment.
///
/// `slot_label` is interpolated for gear and texture edits ("headgear",
/// "tops", "entire outfit", ...) and ignored by other categories.
/// `Category::BatchOutfit` ignores the fragment and returns the fixed
/// eight themed instructions; everything else returns exactly one.
pub fn compose(category: Category, fragment: &str, slot_label: &str) -> Vec<String> {
    let rule = rule_for(category);
    match category {
        Category::BatchOutfit => BATCH_OUTFIT_THEMES
            .iter()
            .map(|theme| render(rule.template, theme, slot_label))
            .collect(),
        _ => vec![render(rule.template, fragment, slot_label)],
    }
}

/// Compose for a catalog item picked from a slot.
pub fn compose_item(slot: &Slot, item: &SelectionItem) -> Vec<String> {
    compose(item.category, item.fragment, &slot.label.to_lowercase())
}

/// Compose a texture restyle of one garment target.
pub fn compose_texture(item: &SelectionItem, target: TextureTarget) -> String {
    let template = match target {
        TextureTarget::Outfit => TEXTURE_OUTFIT_TEMPLATE,
        _ => rule_for(Category::Texture).template,
    };
    render(template, item.fragment, target.label())
}

/// Wrap free-form user text in the identity/quality-preservation suffix.
pub fn compose_custom(text: &str) -> String {
    render(rule_for(Category::Custom).template, text, "")
}

/// Instruction for extending the image to a new aspect ratio.
pub fn expand_instruction() -> String {
    EXPAND_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_hair_color_pins_style_and_length() {
        let red = catalog::find_item("hair_color", "hc_red").unwrap();
        let out = compose(red.category, red.fragment, "");
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("vibrant red"));
        assert!(out[0].contains("Do not cut or restyle the hair"));
        assert!(out[0].contains("Maintain the exact current hairstyle, length"));
    }

    #[test]
    fn test_environment_permits_pose_but_pins_outfit() {
        let beach = catalog::find_item("scene", "s_beach").unwrap();
        let out = compose(beach.category, beach.fragment, "");
        assert!(out[0].starts_with("Place the character on a tropical beach"));
        assert!(out[0].contains("Adjust the character's pose and lighting"));
        assert!(out[0].contains("outfit details and facial identity exactly"));
    }

    #[test]
    fn test_gear_names_the_slot() {
        let slot = catalog::find_slot("headgear").unwrap();
        let crown = catalog::find_item("headgear", "hg_crown").unwrap();
        let out = compose_item(slot, crown);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("person's headgear to wearing a royal golden crown"));
        assert!(out[0].contains("other clothing details exactly"));
    }

    #[test]
    fn test_texture_targets() {
        let velvet = catalog::find_item("texture", "tx_velvet").unwrap();
        let top = compose_texture(velvet, TextureTarget::Top);
        assert!(top.contains("person's top to be made of soft crushed velvet fabric"));
        assert!(top.contains("Do NOT add any accessories"));

        let outfit = compose_texture(velvet, TextureTarget::Outfit);
        assert!(outfit.contains("person's entire outfit to be"));
        assert!(outfit.contains("garment cut/style exactly"));
        assert!(!outfit.contains("style of the garment exactly"));
    }

    #[test]
    fn test_batch_outfit_is_eight_distinct_instructions() {
        let out = compose(Category::BatchOutfit, "", "");
        assert_eq!(out.len(), 8);
        let unique: std::collections::HashSet<_> = out.iter().collect();
        assert_eq!(unique.len(), 8);
        for instruction in &out {
            assert!(instruction.contains("Maintain facial identity"));
        }
        assert!(out[0].contains("business suit"));
        assert!(out[7].contains("minimalist monochrome"));
    }

    #[test]
    fn test_custom_wraps_free_text() {
        let out = compose_custom("make the jacket red");
        assert_eq!(
            out,
            "Edit this photo: make the jacket red. Maintain facial identity and realistic quality."
        );
    }

    #[test]
    fn test_expand_pins_subject_scale() {
        let out = expand_instruction();
        assert!(out.contains("outpainting"));
        assert!(out.contains("same scale and size"));
    }

    #[test]
    fn test_commit_policy_per_category() {
        assert_eq!(commit_policy(Category::Texture), CommitPolicy::Review);
        assert_eq!(commit_policy(Category::BatchOutfit), CommitPolicy::Review);
        assert_eq!(commit_policy(Category::Environment), CommitPolicy::Auto);
        assert_eq!(commit_policy(Category::Gear), CommitPolicy::Auto);
        assert_eq!(commit_policy(Category::Custom), CommitPolicy::Auto);
    }

    #[test]
    fn test_no_placeholders_survive_for_any_catalog_item() {
        for slot in catalog::slots() {
            let label = slot.label.to_lowercase();
            for item in slot.items {
                if item.category == Category::Texture {
                    continue; // composed via compose_texture with a target
                }
                for instruction in compose(item.category, item.fragment, &label) {
                    assert!(
                        !instruction.contains('{') && !instruction.contains('}'),
                        "unrendered placeholder in {}: {}",
                        item.id,
                        instruction
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_category_has_a_rule() {
        for category in [
            Category::Environment,
            Category::Pose,
            Category::Gear,
            Category::HairStyle,
            Category::HairColor,
            Category::Makeup,
            Category::BodyType,
            Category::Texture,
            Category::BatchOutfit,
            Category::Custom,
        ] {
            assert_eq!(rule_for(category).category, category);
        }
    }
}
