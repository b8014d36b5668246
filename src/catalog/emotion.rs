// Catalog: 마음과 감정
use super::{Category, IdiomEntry};

const C: Category = Category::Emotion;

pub(super) const EMOTION: &[IdiomEntry] = &[
    IdiomEntry {
        id: 41,
        script: "喜怒哀樂",
        phonetic: "희로애락",
        meaning: "기쁨과 노여움과 슬픔과 즐거움",
        explanation: "사람이 느끼는 여러 가지 감정을 통틀어 이른다.",
        example: "그 영화에는 인생의 희로애락이 고스란히 담겨 있다.",
        origin: "중용(中庸) 1장",
        category: C,
    },
    IdiomEntry {
        id: 42,
        script: "勞心焦思",
        phonetic: "노심초사",
        meaning: "마음을 수고롭게 하고 속을 태운다",
        explanation: "몹시 마음을 쓰며 애를 태움을 이른다.",
        example: "어머니는 아들의 수술 결과를 노심초사 기다렸다.",
        origin: "사기(史記) 월왕구천세가",
        category: C,
    },
    IdiomEntry {
        id: 43,
        script: "愛之重之",
        phonetic: "애지중지",
        meaning: "사랑하고 소중히 여긴다",
        explanation: "매우 사랑하여 아끼고 귀하게 여김을 이른다.",
        example: "할머니가 물려주신 반지를 애지중지한다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 44,
        script: "眼下無人",
        phonetic: "안하무인",
        meaning: "눈 아래에 사람이 없다",
        explanation: "방자하고 교만하여 다른 사람을 업신여김을 이른다.",
        example: "성공하더니 안하무인으로 행동해 사람들이 떠났다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 45,
        script: "感慨無量",
        phonetic: "감개무량",
        meaning: "느끼는 감동이 한이 없다",
        explanation: "마음속 깊이 느끼는 감회가 끝이 없음을 이른다.",
        example: "이십 년 만에 고향에 돌아오니 감개무량하다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 46,
        script: "一喜一悲",
        phonetic: "일희일비",
        meaning: "한편으로 기뻐하고 한편으로 슬퍼한다",
        explanation: "상황이 바뀔 때마다 기뻐하고 슬퍼함을 이른다.",
        example: "주가 변동에 일희일비하지 말자.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 47,
        script: "鶴首苦待",
        phonetic: "학수고대",
        meaning: "학처럼 목을 길게 빼고 애타게 기다린다",
        explanation: "몹시 기다림을 이르는 말이다.",
        example: "합격 발표를 학수고대하고 있다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 48,
        script: "戰戰兢兢",
        phonetic: "전전긍긍",
        meaning: "몹시 두려워서 벌벌 떨며 조심한다",
        explanation: "위기감에 떨며 매우 조심함을 이른다.",
        example: "실수가 드러날까 봐 며칠째 전전긍긍했다.",
        origin: "시경(詩經) 소아 소민편",
        category: C,
    },
    IdiomEntry {
        id: 49,
        script: "自暴自棄",
        phonetic: "자포자기",
        meaning: "스스로 자신을 해치고 버린다",
        explanation: "절망에 빠져 스스로를 돌보지 않음을 이른다.",
        example: "한 번 실패했다고 자포자기할 필요는 없다.",
        origin: "맹자(孟子) 이루편",
        category: C,
    },
    IdiomEntry {
        id: 50,
        script: "惻隱之心",
        phonetic: "측은지심",
        meaning: "불쌍히 여기는 마음",
        explanation: "맹자가 말한 사단(四端)의 하나로, 남을 가엾게 여기는 마음이다.",
        example: "길 잃은 강아지를 보니 측은지심이 들었다.",
        origin: "맹자(孟子) 공손추편",
        category: C,
    },
];
