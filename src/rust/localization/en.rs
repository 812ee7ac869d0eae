//! English display names and guidance, in `Category::ALL` order.

use super::StaticGuidance;

pub(super) const NAMES: [&str; 4] = [
    "plastic bottle",
    "plastic bag",
    "lithium battery",
    "aerosol sprays",
];

pub(super) const GUIDANCE: [StaticGuidance; 4] = [
    StaticGuidance {
        disposal_tip: "Rinse and place in recycling bin.",
        bad_effect: "Improper disposal contributes to plastic pollution in landfills and oceans.",
        alternative: "Use reusable water bottles to reduce plastic waste.",
        creative_reuse: "Repurpose into planters, bird feeders, or storage containers.",
        creative_reuse_video: "https://www.youtube.com/watch?v=5-MCZm0GWg4",
        profit_idea: "Collect and sell to recycling centers for processing into new plastic products.",
    },
    StaticGuidance {
        disposal_tip: "Dispose of by reusing or recycling at designated drop-off points.",
        bad_effect: "Do not burn, as it releases harmful chlorine gas and dioxins, causing air pollution and health issues like respiratory problems.",
        alternative: "Use cloth or jute bags to reduce plastic use.",
        creative_reuse: "Transform into woven mats or storage pouches.",
        creative_reuse_video: "https://www.youtube.com/watch?v=ZpB-HknpOAg",
        profit_idea: "Sell Collected Bags to Recycling Companies – Collect used plastic bags and sell them directly to recycling plants, where they are shredded, melted, and turned into plastic granules.",
    },
    StaticGuidance {
        disposal_tip: "Do not dispose in regular trash; take to designated battery recycling centers.",
        bad_effect: "Improper disposal can lead to fires, explosions, or leakage of toxic chemicals, harming the environment and health.",
        alternative: "Use rechargeable batteries with proper recycling programs.",
        creative_reuse: "Donate functional batteries to community programs or repurpose for low-power DIY projects.",
        creative_reuse_video: "https://www.youtube.com/watch?v=9qP3T5A2cZ8",
        profit_idea: "Partner with recycling companies to collect and sell used lithium batteries for safe processing.",
    },
    StaticGuidance {
        disposal_tip: "Ensure cans are completely empty and recycle at designated facilities; check local regulations.",
        bad_effect: "Puncturing or burning can cause explosions and release harmful chemicals into the air.",
        alternative: "Use pump or non-aerosol alternatives for sprays.",
        creative_reuse: "Repurpose empty cans as storage containers or art project materials after ensuring they are depressurized.",
        creative_reuse_video: "https://www.youtube.com/watch?v=6oB6Y3tI41Q",
        profit_idea: "Collect and sell empty aerosol cans to scrap metal recyclers for profit.",
    },
];
