//! Kannada display names and guidance, in `Category::ALL` order.

use super::StaticGuidance;

pub(super) const NAMES: [&str; 4] = [
    "ಪ್ಲಾಸ್ಟಿಕ್ ಬಾಟಲ್",
    "ಪ್ಲಾಸ್ಟಿಕ್ ಚೀಲ",
    "ಲಿಥಿಯಂ ಬ್ಯಾಟರಿ",
    "ಏರೋಸಾಲ್ ಸ್ಪ್ರೇ",
];

pub(super) const GUIDANCE: [StaticGuidance; 4] = [
    StaticGuidance {
        disposal_tip: "ತೊಳೆದು ಮರುಬಳಕೆ ಬಿನ್‌ಗೆ ಹಾಕಿ.",
        bad_effect: "ಅನುಚಿತ ವಿಲೇವಾರಿಯಿಂದ ಭೂಕುಸಿತ ಮತ್ತು ಸಮುದ್ರದಲ್ಲಿ ಪ್ಲಾಸ್ಟಿಕ್ ಮಾಲಿನ್ಯ ಹೆಚ್ಚಾಗುತ್ತದೆ.",
        alternative: "ಪ್ಲಾಸ್ಟಿಕ್ ಕಸವನ್ನು ಕಡಿಮೆ ಮಾಡಲು ಮರುಬಳಕೆಯ ಜಲದ ಬಾಟಲಿಗಳನ್ನು ಬಳಸಿ.",
        creative_reuse: "ಪ್ಲಾಂಟರ್‌ಗಳು, ಪಕ್ಷಿಗಳ ಆಹಾರಕಾರಕ, ಅಥವಾ ಸಂಗ್ರಹಣೆ ಕಂಟೇನರ್‌ಗಳಾಗಿ ಮರುಬಳಕೆ ಮಾಡಿ.",
        creative_reuse_video: "https://www.youtube.com/watch?v=5-MCZm0GWg4",
        profit_idea: "ಮರುಬಳಕೆ ಕೇಂದ್ರಗಳಿಗೆ ಸಂಗ್ರಹಿಸಿ ಮತ್ತು ಮಾರಾಟ ಮಾಡಿ, ಇದನ್ನು ಹೊಸ ಪ್ಲಾಸ್ಟಿಕ್ ಉತ್ಪನ್ನಗಳಾಗಿ ಸಂಸ್ಕರಿಸಬಹುದು.",
    },
    StaticGuidance {
        disposal_tip: "ಮರುಬಳಕೆ ಮಾಡಿ ಅಥವಾ ನಿಗದಿತ ಡ್ರಾಪ್-ಆಫ್ ಪಾಯಿಂಟ್‌ಗಳಲ್ಲಿ ಮರುಬಳಕೆಗೆ ಒಡ್ಡಿ.",
        bad_effect: "ಸುಡಬೇಡಿ, ಏಕೆಂದರೆ ಇದು ಹಾನಿಕಾರಕ ಕ್ಲೋರಿನ್ ಗ್ಯಾಸ್ ಮತ್ತು ಡಯಾಕ್ಸಿನ್‌ಗಳನ್ನು ಬಿಡುಗಡೆ ಮಾಡುತ್ತದೆ, ಇದರಿಂದ ವಾಯು ಮಾಲಿನ್ಯ ಮತ್ತು ಉಸಿರಾಟದ ಸಮಸ್ಯೆಗಳಂತಹ ಆರೋಗ್ಯ ಸಮಸ್ಯೆಗಳು ಉಂಟಾಗುತ್ತವೆ.",
        alternative: "ಪ್ಲಾಸ್ಟಿಕ್ ಬಳಕೆಯನ್ನು ಕಡಿಮೆ ಮಾಡಲು ಬಟ್ಟೆ ಅಥವಾ ಜೂಟ್ ಚೀಲಗಳನ್ನು ಬಳಸಿ.",
        creative_reuse: "ನೇಯ್ದ ಮ್ಯಾಟ್‌ಗಳು ಅಥವಾ ಸಂಗ್ರಹಣೆ ಪೌಚ್‌ಗಳಾಗಿ ಪರಿವರ್ತಿಸಿ.",
        creative_reuse_video: "https://www.youtube.com/watch?v=ZpB-HknpOAg",
        profit_idea: "ಮರುಬಳಕೆ ಕೇಂದ್ರಗಳಿಗೆ ಮಾರಾಟ ಮಾಡಿ ಅಥವಾ ಮರುಬಳಕೆ ಶಾಪಿಂಗ್ ಬ್ಯಾಗ್‌ಗಳಂತಹ ಮಾರಾಟಕ್ಕೆ ಯೋಗ್ಯ ಉತ್ಪನ್ನಗಳಾಗಿ ರೂಪಿಸಿ.",
    },
    StaticGuidance {
        disposal_tip: "ನಿಯಮಿತ ಕಸದೊಂದಿಗೆ ವಿಲೇವಾರಿ ಮಾಡಬೇಡಿ; ನಿಗದಿತ ಬ್ಯಾಟರಿ ಮರುಬಳಕೆ ಕೇಂದ್ರಗಳಿಗೆ ತೆಗೆದುಕೊಂಡು ಹೋಗಿ.",
        bad_effect: "ಅನುಚಿತ ವಿಲೇವಾರಿಯಿಂದ ಬೆಂಕಿ, ಸ್ಫೋಟ ಅಥವಾ ವಿಷಕಾರಿ ರಾಸಾಯನಿಕಗಳ ಸೋರಿಕೆಯಾಗಬಹುದು, ಇದು ಪರಿಸರ ಮತ್ತು ಆರೋಗ್ಯಕ್ಕೆ ಹಾನಿಯನ್ನುಂಟುಮಾಡುತ್ತದೆ.",
        alternative: "ಸರಿಯಾದ ಮರುಬಳಕೆ ಕಾರ್ಯಕ್ರಮಗಳೊಂದಿಗೆ ರೀಚಾರ್ಜ್ ಮಾಡಬಹುದಾದ ಬ್ಯಾಟರಿಗಳನ್ನು ಬಳಸಿ.",
        creative_reuse: "ಕಾರ್ಯಾತ್ಮಕ ಬ್ಯಾಟರಿಗಳನ್ನು ಸಮುದಾಯ ಕಾರ್ಯಕ್ರಮಗಳಿಗೆ ದಾನ ಮಾಡಿ ಅಥವಾ ಕಡಿಮೆ-ಶಕ್ತಿಯ DIY ಯೋಜನೆಗಳಿಗೆ ಮರುಬಳಕೆ ಮಾಡಿ.",
        creative_reuse_video: "https://www.youtube.com/watch?v=9qP3T5A2cZ8",
        profit_idea: "ಮರುಬಳಕೆ ಕಂಪನಿಗಳೊಂದಿಗೆ ಸಹಭಾಗಿತ್ವವನ್ನು ಹೊಂದಿ, ಬಳಸಿದ ಲಿಥಿಯಂ ಬ್ಯಾಟರಿಗಳನ್ನು ಸಂಗ್ರಹಿಸಿ ಮತ್ತು ಮಾರಾಟ ಮಾಡಿ.",
    },
    StaticGuidance {
        disposal_tip: "ಕ್ಯಾನ್‌ಗಳು ಸಂಪೂರ್ಣವಾಗಿ ಖಾಲಿಯಾಗಿರುವುದನ್ನು ಖಚಿತಪಡಿಸಿಕೊಂಡು ನಿಗದಿತ ಸೌಲಭ್ಯಗಳಲ್ಲಿ ಮರುಬಳಕೆ ಮಾಡಿ; ಸ್ಥಳೀಯ ನಿಯಮಗಳನ್ನು ಪರಿಶೀಲಿಸಿ.",
        bad_effect: "ಕುಟ್ಟುವುದು ಅಥವಾ ಸುಡುವುದರಿಂದ ಸ್ಫೋಟವಾಗಬಹುದು ಮತ್ತು ಹಾನಿಕಾರಕ ರಾಸಾಯನಿಕಗಳು ಗಾಳಿಯಲ್ಲಿ ಬಿಡುಗಡೆಯಾಗಬಹುದು.",
        alternative: "ಸ್ಪ್ರೇಗಾಗಿ ಪಂಪ್ ಅಥವಾ ಏರೋಸಾಲ್ ಅಲ್ಲದ ವಿಕಲ್ಪಗಳನ್ನು ಬಳಸಿ.",
        creative_reuse: "ಖಾಲಿಯಾದ ಕ್ಯಾನ್‌ಗಳನ್ನು ಒತ್ತಡರಹಿತಗೊಳಿಸಿದ ನಂತರ ಶೇಖರಣಾ ಕಂಟೇನರ್‌ಗಳು ಅಥವಾ ಕಲಾ ಯೋಜನೆಯ ವಸ್ತುಗಳಾಗಿ ಮರುಬಳಕೆ ಮಾಡಿ.",
        creative_reuse_video: "https://www.youtube.com/watch?v=6oB6Y3tI41Q",
        profit_idea: "ಖಾಲಿ ಏರೋಸಾಲ್ ಕ್ಯಾನ್‌ಗಳನ್ನು ಸ್ಕ್ರಾಪ್ ಲೋಹದ ಮರುಬಳಕೆಗಾರರಿಗೆ ಮಾರಾಟ ಮಾಡಿ ಲಾಭ ಗಳಿಸಿ.",
    },
];
