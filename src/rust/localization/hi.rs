//! Hindi display names and guidance, in `Category::ALL` order.

use super::StaticGuidance;

pub(super) const NAMES: [&str; 4] = [
    "प्लास्टिक की बोतल",
    "प्लास्टिक की थैली",
    "लिथियम बैटरी",
    "एरोसोल स्प्रे",
];

pub(super) const GUIDANCE: [StaticGuidance; 4] = [
    StaticGuidance {
        disposal_tip: "कुल्ला करें और रीसाइक्लिंग बिन में डालें।",
        bad_effect: "अनुचित निपटान से लैंडफिल और समुद्र में प्लास्टिक प्रदूषण बढ़ता है।",
        alternative: "प्लास्टिक कचरे को कम करने के लिए पुन: उपयोग योग्य पानी की बोतलें उपयोग करें।",
        creative_reuse: "प्लांटर्स, बर्ड फीडर, या स्टोरेज कंटेनर के रूप में पुन: उपयोग करें।",
        creative_reuse_video: "https://www.youtube.com/watch?v=5-MCZm0GWg4",
        profit_idea: "रीसाइक्लिंग केंद्रों को इकट्ठा करें और बेचें ताकि नए प्लास्टिक उत्पादों में संसाधित किया जा सके।",
    },
    StaticGuidance {
        disposal_tip: "पुन: उपयोग करें या निर्दिष्ट ड्रॉप-ऑफ पॉइंट्स पर रीसाइक्लिंग करें।",
        bad_effect: "जलाएं नहीं, क्योंकि यह हानिकारक क्लोरीन गैस और डाइऑक्सिन छोड़ता है, जिससे वायु प्रदूषण और श्वसन समस्याओं जैसी स्वास्थ्य समस्याएं होती हैं।",
        alternative: "प्लास्टिक के उपयोग को कम करने के लिए कपड़े या जूट के थैले का उपयोग करें।",
        creative_reuse: "बुने हुए मैट या स्टोरेज पाउच में बदलें।",
        creative_reuse_video: "https://www.youtube.com/watch?v=ZpB-HknpOAg",
        profit_idea: "रीसाइक्लिंग सेंटरों को बेचें या पुन: उपयोग योग्य शॉपिंग बैग जैसे विपणन योग्य उत्पादों में बनाएं।",
    },
    StaticGuidance {
        disposal_tip: "नियमित कचरे में न फेंकें; निर्दिष्ट बैटरी रीसाइक्लिंग केंद्रों में ले जाएं।",
        bad_effect: "अनुचित निपटान से आग, विस्फोट या जहरीले रसायनों का रिसाव हो सकता है, जो पर्यावरण और स्वास्थ्य को नुकसान पहुंचाता है।",
        alternative: "उचित रीसाइक्लिंग कार्यक्रमों के साथ रिचार्जेबल बैटरी का उपयोग करें।",
        creative_reuse: "कार्यात्मक बैटरी को सामुदायिक कार्यक्रमों में दान करें या कम-शक्ति वाले DIY प्रोजेक्ट्स के लिए पुन: उपयोग करें।",
        creative_reuse_video: "https://www.youtube.com/watch?v=9qP3T5A2cZ8",
        profit_idea: "रीसाइक्लिंग कंपनियों के साथ साझेदारी करके उपयोग की गई लिथियम बैटरी एकत्र करें और बेचें।",
    },
    StaticGuidance {
        disposal_tip: "सुनिश्चित करें कि डिब्बे पूरी तरह से खाली हैं और निर्दिष्ट सुविधाओं पर रीसाइक्लिंग करें; स्थानीय नियमों की जांच करें।",
        bad_effect: "छेद करने या जलाने से विस्फोट हो सकता है और हानिकारक रसायन हवा में निकल सकते हैं।",
        alternative: "स्प्रे के लिए पंप या गैर-एरोसोल विकल्पों का उपयोग करें।",
        creative_reuse: "खाली डिब्बों को सुनिश्चित करने के बाद भंडारण कंटेनर या कला परियोजना सामग्री के रूप में पुन: उपयोग करें।",
        creative_reuse_video: "https://www.youtube.com/watch?v=6oB6Y3tI41Q",
        profit_idea: "खाली एरोसोल डिब्बों को स्क्रैप धातु रीसाइक्लर्स को बेचकर लाभ कमाएं।",
    },
];
