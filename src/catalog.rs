//! Static selection catalog.
//!
//! Read-only tables of everything a user can pick: hair, makeup, body
//! type, scenes, poses, gear slots, fabric textures, and motion moves
//! for video. Scenes additionally carry pose-suggestion hints. Loaded
//! into the binary at compile time, never mutated.

/// Which prompt rule applies to a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Environment,
    Pose,
    Gear,
    HairStyle,
    HairColor,
    Makeup,
    BodyType,
    Texture,
    BatchOutfit,
    Custom,
}

/// One pickable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Natural-language fragment interpolated into the category template.
    pub fragment: &'static str,
    /// Pose ids recommended when this entry is a scene.
    pub suggested_poses: &'static [&'static str],
}

/// A named group of catalog entries (one per editor slot).
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub id: &'static str,
    /// Lowercased into gear instructions ("headgear", "tops", ...).
    pub label: &'static str,
    pub items: &'static [SelectionItem],
}

/// A predefined motion for video generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionMove {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
}

const fn item(
    id: &'static str,
    name: &'static str,
    category: Category,
    fragment: &'static str,
) -> SelectionItem {
    SelectionItem {
        id,
        name,
        category,
        fragment,
        suggested_poses: &[],
    }
}

const fn scene(
    id: &'static str,
    name: &'static str,
    fragment: &'static str,
    suggested_poses: &'static [&'static str],
) -> SelectionItem {
    SelectionItem {
        id,
        name,
        category: Category::Environment,
        fragment,
        suggested_poses,
    }
}

const fn gear(id: &'static str, name: &'static str, fragment: &'static str) -> SelectionItem {
    item(id, name, Category::Gear, fragment)
}

static HAIR_STYLES: &[SelectionItem] = &[
    item("hs_bob", "Bob Cut", Category::HairStyle, "a chic short bob haircut"),
    item("hs_long", "Long Layers", Category::HairStyle, "long layered flowing hair"),
    item("hs_pixie", "Pixie Cut", Category::HairStyle, "a short stylish pixie cut"),
    item("hs_braids", "Box Braids", Category::HairStyle, "long stylish box braids"),
    item("hs_afro", "Natural Afro", Category::HairStyle, "a natural voluminous afro hairstyle"),
    item("hs_ponytail", "Ponytail", Category::HairStyle, "hair tied back in a high ponytail"),
    item("hs_bun", "Messy Bun", Category::HairStyle, "hair up in a casual messy bun"),
    item("hs_bald", "Buzz/Bald", Category::HairStyle, "a buzz cut or bald head"),
    item("hs_mohawk", "Mohawk", Category::HairStyle, "a punk style mohawk"),
    item("hs_undercut", "Undercut", Category::HairStyle, "a modern undercut hairstyle"),
];

static HAIR_COLORS: &[SelectionItem] = &[
    item("hc_blonde", "Platinum", Category::HairColor, "platinum blonde"),
    item("hc_red", "Vibrant Red", Category::HairColor, "vibrant red"),
    item("hc_blue", "Electric Blue", Category::HairColor, "electric blue"),
    item("hc_pink", "Pastel Pink", Category::HairColor, "pastel pink"),
    item("hc_brown", "Chestnut", Category::HairColor, "dark chestnut brown"),
    item("hc_black", "Jet Black", Category::HairColor, "jet black"),
    item("hc_silver", "Silver", Category::HairColor, "metallic silver"),
    item("hc_rainbow", "Rainbow", Category::HairColor, "multicolored rainbow"),
    item("hc_green", "Neon Green", Category::HairColor, "neon green"),
];

static MAKEUP: &[SelectionItem] = &[
    item("mu_none", "No Makeup", Category::Makeup, "fresh face, no makeup, natural skin"),
    item("mu_natural", "Natural Glam", Category::Makeup, "soft natural glam makeup"),
    item("mu_redlip", "Classic Red", Category::Makeup, "classic red lipstick and winged eyeliner"),
    item("mu_smokey", "Smokey Eye", Category::Makeup, "intense dark smokey eye makeup"),
    item("mu_goth", "Goth", Category::Makeup, "dark goth style makeup with black lipstick"),
    item("mu_euphoria", "Glitter", Category::Makeup, "euphoria-style glitter and rhinestone makeup"),
    item("mu_cyber", "Cyberpunk", Category::Makeup, "futuristic cyberpunk face markings and metallic makeup"),
    item("mu_war", "War Paint", Category::Makeup, "tribal warrior face paint"),
];

static BODY_TYPES: &[SelectionItem] = &[
    item("bt_athletic", "Athletic", Category::BodyType, "an athletic, toned body type"),
    item("bt_slender", "Slender", Category::BodyType, "a tall, slender fashion model body type"),
    item("bt_curvy", "Curvy", Category::BodyType, "a curvy, full-figured body type"),
    item("bt_muscular", "Muscular", Category::BodyType, "a heavily muscular bodybuilder body type"),
    item("bt_cyborg", "Cyborg", Category::BodyType, "a half-human half-robot cyborg body"),
    item("bt_ethereal", "Ethereal", Category::BodyType, "a glowing, semi-transparent ethereal spirit form"),
];

static SCENES: &[SelectionItem] = &[
    scene("s_studio", "Studio", "in a professional photo studio with a solid color backdrop", &["p_crossed", "p_hands_pocket"]),
    scene("s_cyber", "Cyber City", "in a futuristic cyberpunk city street with neon lights and rain", &["p_walking", "p_looking_back"]),
    scene("s_cafe", "Coffee Shop", "inside a cozy warm-lit coffee shop", &["p_sitting", "p_drinking"]),
    scene("s_beach", "Beach Sunset", "on a tropical beach during golden hour sunset", &["p_sitting", "p_running"]),
    scene("s_office", "Modern Office", "in a sleek modern corporate office with glass walls", &["p_crossed", "p_sitting"]),
    scene("s_forest", "Misty Forest", "deep in a misty, magical pine forest", &["p_walking", "p_looking_back"]),
    scene("s_space", "Space Station", "inside a high-tech sci-fi space station with view of earth", &["p_floating"]),
    scene("s_dojo", "Dojo", "inside a traditional japanese dojo", &["p_martial_arts"]),
    scene("s_redcarpet", "Red Carpet", "on a red carpet event with paparazzi flashes", &["p_wave", "p_pose"]),
    scene("s_underwater", "Underwater", "underwater in a coral reef (magically breathing)", &["p_floating"]),
];

static POSES: &[SelectionItem] = &[
    item("p_crossed", "Arms Crossed", Category::Pose, "standing confidently with arms crossed"),
    item("p_hands_pocket", "Hands in Pocket", Category::Pose, "standing casually with hands in pockets"),
    item("p_sitting", "Sitting Down", Category::Pose, "sitting down comfortably"),
    item("p_wave", "Waving", Category::Pose, "waving a friendly hello"),
    item("p_peace", "Peace Sign", Category::Pose, "making a peace sign gesture"),
    item("p_walking", "Walking", Category::Pose, "walking forward with purpose"),
    item("p_running", "Running", Category::Pose, "running dynamically"),
    item("p_drinking", "Sipping Coffee", Category::Pose, "holding and sipping from a cup"),
    item("p_looking_back", "Looking Back", Category::Pose, "standing turned away but looking back over shoulder"),
    item("p_floating", "Floating", Category::Pose, "floating in the air defying gravity"),
    item("p_martial_arts", "Combat Stance", Category::Pose, "in a martial arts combat stance"),
    item("p_pose", "Fashion Pose", Category::Pose, "doing a high-fashion model pose"),
];

static HEADGEAR: &[SelectionItem] = &[
    gear("hg_none", "No Headgear", "wearing no hat or headgear"),
    gear("hg_cap", "Baseball Cap", "wearing a baseball cap"),
    gear("hg_beanie", "Beanie", "wearing a knitted beanie"),
    gear("hg_fedora", "Fedora", "wearing a fedora hat"),
    gear("hg_crown", "Gold Crown", "wearing a royal golden crown"),
    gear("hg_tiara", "Tiara", "wearing a sparkling diamond tiara"),
    gear("hg_headphones", "Headphones", "wearing large over-ear headphones"),
    gear("hg_helmet", "Sci-Fi Helmet", "wearing a futuristic sci-fi helmet (visor open)"),
    gear("hg_flowers", "Flower Crown", "wearing a crown of fresh flowers"),
    gear("hg_cowboy", "Cowboy Hat", "wearing a leather cowboy hat"),
];

static OUTFITS: &[SelectionItem] = &[
    item("o_batch", "Auto-Generate Wardrobe (8 Styles)", Category::BatchOutfit, ""),
    gear("o_suit", "Business Suit", "wearing a tailored charcoal grey business suit"),
    gear("o_dress", "Evening Gown", "wearing an elegant red evening gown"),
    gear("o_tux", "Tuxedo", "wearing a classic black tuxedo"),
    gear("o_jumpsuit", "Jumpsuit", "wearing a stylish fashionable jumpsuit"),
    gear("o_kimono", "Kimono", "wearing a beautiful traditional japanese kimono"),
    gear("o_tracksuit", "Tracksuit", "wearing a matching athletic tracksuit"),
    gear("o_cyber", "Cyberpunk Suit", "wearing a futuristic high-tech cyberpunk suit"),
];

static TOPS: &[SelectionItem] = &[
    gear("t_white", "White Tee", "wearing a clean white t-shirt"),
    gear("t_hoodie", "Hoodie", "wearing a comfortable hoodie"),
    gear("t_suit", "Suit Jacket", "wearing a formal business suit jacket"),
    gear("t_leather", "Leather Jacket", "wearing a black leather biker jacket"),
    gear("t_denim", "Denim Jacket", "wearing a blue denim jacket"),
    gear("t_tank", "Tank Top", "wearing a tank top"),
    gear("t_flannel", "Flannel", "wearing a plaid flannel shirt"),
    gear("t_sweater", "Knit Sweater", "wearing a cozy knit sweater"),
    gear("t_corset", "Corset", "wearing a victorian style corset"),
    gear("t_crop", "Crop Top", "wearing a stylish crop top"),
    gear("t_armor", "Plate Armor", "wearing shining medieval plate armor"),
    gear("t_trench", "Trench Coat", "wearing a long beige trench coat"),
];

static BOTTOMS: &[SelectionItem] = &[
    gear("b_jeans", "Blue Jeans", "wearing blue denim jeans"),
    gear("b_cargo", "Cargo Pants", "wearing utility cargo pants"),
    gear("b_shorts", "Shorts", "wearing casual shorts"),
    gear("b_slacks", "Dress Slacks", "wearing formal dress slacks"),
    gear("b_skirt_mini", "Mini Skirt", "wearing a short mini skirt"),
    gear("b_skirt_long", "Maxi Skirt", "wearing a flowing long maxi skirt"),
    gear("b_leggings", "Leggings", "wearing athletic leggings"),
    gear("b_chinos", "Chinos", "wearing beige chino pants"),
    gear("b_kilt", "Kilt", "wearing a traditional tartan kilt"),
    gear("b_leather", "Leather Pants", "wearing tight black leather pants"),
    gear("b_sweats", "Sweatpants", "wearing comfortable grey sweatpants"),
];

static TEXTURES: &[SelectionItem] = &[
    item("tx_sheer_50", "Ultra Sheer", Category::Texture, "made of ultra-thin 50% sheer semi-transparent fabric"),
    item("tx_velvet", "Velvet", Category::Texture, "made of soft crushed velvet fabric"),
    item("tx_denim", "Denim", Category::Texture, "made of sturdy blue denim fabric"),
    item("tx_leather", "Leather", Category::Texture, "made of sleek black leather"),
    item("tx_latex", "Latex", Category::Texture, "made of shiny tight latex"),
    item("tx_satin", "Satin", Category::Texture, "made of smooth silky satin"),
    item("tx_cotton", "Cotton", Category::Texture, "made of simple soft cotton fabric"),
    item("tx_wool", "Wool", Category::Texture, "made of thick knitted wool"),
    item("tx_red", "Red Dye", Category::Texture, "dyed vibrant red"),
    item("tx_blue", "Blue Dye", Category::Texture, "dyed deep blue"),
    item("tx_black", "Black Dye", Category::Texture, "dyed jet black"),
    item("tx_white", "White Dye", Category::Texture, "dyed pure white"),
];

static ACCESSORIES: &[SelectionItem] = &[
    gear("a_none", "Remove Acc", "wearing no accessories, jewelry, or bags"),
    gear("a_chain", "Gold Chain", "wearing a thick gold chain necklace"),
    gear("a_glasses", "Sunglasses", "wearing stylish sunglasses"),
    gear("a_specs", "Glasses", "wearing prescription glasses"),
    gear("a_scarf", "Scarf", "wearing a warm scarf"),
    gear("a_backpack", "Backpack", "wearing a backpack"),
    gear("a_watch", "Rolex", "wearing a luxury wristwatch"),
    gear("a_wings", "Angel Wings", "with large white feathered angel wings on back"),
    gear("a_guitar", "Guitar", "with an electric guitar slung over shoulder"),
    gear("a_sword", "Katana", "with a katana sword on back"),
    gear("a_tattoo", "Arm Tattoo", "with visible intricate tattoos on arms"),
    gear("a_pet", "Shoulder Pet", "with a small cute parrot sitting on the shoulder"),
];

static SLOTS: &[Slot] = &[
    Slot { id: "hair_style", label: "Hair Style", items: HAIR_STYLES },
    Slot { id: "hair_color", label: "Hair Color", items: HAIR_COLORS },
    Slot { id: "makeup", label: "Makeup", items: MAKEUP },
    Slot { id: "body_type", label: "Body Type", items: BODY_TYPES },
    Slot { id: "scene", label: "Scene", items: SCENES },
    Slot { id: "pose", label: "Pose", items: POSES },
    Slot { id: "headgear", label: "Headgear", items: HEADGEAR },
    Slot { id: "outfit", label: "Full Outfit", items: OUTFITS },
    Slot { id: "top", label: "Tops", items: TOPS },
    Slot { id: "bottom", label: "Bottoms", items: BOTTOMS },
    Slot { id: "texture", label: "Fabric & Color", items: TEXTURES },
    Slot { id: "accessory", label: "Accessories", items: ACCESSORIES },
];

static MOVES: &[MotionMove] = &[
    MotionMove { id: "wave", name: "Friendly Wave", prompt: "The character smiles warmly and waves their hand in a friendly greeting gesture" },
    MotionMove { id: "spin", name: "360 Spin", prompt: "The character performs a smooth, stylish 360-degree spin in place, showing off the outfit" },
    MotionMove { id: "dance_disco", name: "Disco Point", prompt: "The character performs a classic disco dance move, pointing one finger up diagonally" },
    MotionMove { id: "moonwalk", name: "Moonwalk", prompt: "The character performs the moonwalk dance move, gliding backwards smoothly" },
    MotionMove { id: "bow", name: "Gentle Bow", prompt: "The character performs a polite and elegant bow to the audience" },
    MotionMove { id: "dab", name: "The Dab", prompt: "The character performs a perfect dab dance move" },
];

/// All editor slots, in display order.
pub fn slots() -> &'static [Slot] {
    SLOTS
}

pub fn find_slot(slot_id: &str) -> Option<&'static Slot> {
    SLOTS.iter().find(|s| s.id == slot_id)
}

/// Look up an item within a specific slot.
pub fn find_item(slot_id: &str, item_id: &str) -> Option<&'static SelectionItem> {
    find_slot(slot_id)?.items.iter().find(|i| i.id == item_id)
}

/// Pose ids recommended for a scene; empty for unknown scenes.
pub fn suggested_poses(scene_id: &str) -> &'static [&'static str] {
    SCENES
        .iter()
        .find(|s| s.id == scene_id)
        .map(|s| s.suggested_poses)
        .unwrap_or(&[])
}

/// Predefined motion moves for video generation.
pub fn motion_moves() -> &'static [MotionMove] {
    MOVES
}

pub fn find_move(move_id: &str) -> Option<&'static MotionMove> {
    MOVES.iter().find(|m| m.id == move_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_slot_and_item() {
        let slot = find_slot("hair_color").unwrap();
        assert_eq!(slot.label, "Hair Color");

        let red = find_item("hair_color", "hc_red").unwrap();
        assert_eq!(red.fragment, "vibrant red");
        assert_eq!(red.category, Category::HairColor);

        assert!(find_slot("nope").is_none());
        assert!(find_item("hair_color", "nope").is_none());
        // Item ids only resolve within their own slot
        assert!(find_item("pose", "hc_red").is_none());
    }

    #[test]
    fn test_scene_pose_hints() {
        let hints = suggested_poses("s_dojo");
        assert_eq!(hints, &["p_martial_arts"]);
        assert!(suggested_poses("not_a_scene").is_empty());
    }

    #[test]
    fn test_suggested_poses_reference_real_poses() {
        for scene in find_slot("scene").unwrap().items {
            for pose_id in scene.suggested_poses {
                assert!(
                    find_item("pose", pose_id).is_some(),
                    "scene {} suggests unknown pose {}",
                    scene.id,
                    pose_id
                );
            }
        }
    }

    #[test]
    fn test_item_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for slot in slots() {
            for item in slot.items {
                assert!(seen.insert(item.id), "duplicate item id {}", item.id);
            }
        }
    }

    #[test]
    fn test_batch_entry_lives_in_outfit_slot() {
        let batch = find_item("outfit", "o_batch").unwrap();
        assert_eq!(batch.category, Category::BatchOutfit);
    }

    #[test]
    fn test_motion_moves() {
        assert_eq!(motion_moves().len(), 6);
        let dab = find_move("dab").unwrap();
        assert!(dab.prompt.contains("dab"));
        assert!(find_move("nope").is_none());
    }
}
