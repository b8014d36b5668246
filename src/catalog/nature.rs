// Catalog: 자연과 세상
use super::{Category, IdiomEntry};

const C: Category = Category::Nature;

pub(super) const NATURE: &[IdiomEntry] = &[
    IdiomEntry {
        id: 31,
        script: "靑天霹靂",
        phonetic: "청천벽력",
        meaning: "맑은 하늘에 날벼락",
        explanation: "뜻밖에 일어난 큰 변고나 사건을 이른다.",
        example: "갑작스러운 폐업 소식은 청천벽력 같았다.",
        origin: "육유(陸游)의 시",
        category: C,
    },
    IdiomEntry {
        id: 32,
        script: "桑田碧海",
        phonetic: "상전벽해",
        meaning: "뽕밭이 변하여 푸른 바다가 된다",
        explanation: "세상일이 몰라볼 정도로 바뀌었음을 이른다.",
        example: "논밭이던 동네에 빌딩이 들어서 상전벽해가 되었다.",
        origin: "신선전(神仙傳) 마고편",
        category: C,
    },
    IdiomEntry {
        id: 33,
        script: "雪上加霜",
        phonetic: "설상가상",
        meaning: "눈 위에 서리가 덮인다",
        explanation: "어려운 일이 겹쳐서 일어남을 이른다.",
        example: "길을 잃었는데 설상가상으로 비까지 내렸다.",
        origin: "전등록(傳燈錄)",
        category: C,
    },
    IdiomEntry {
        id: 34,
        script: "錦上添花",
        phonetic: "금상첨화",
        meaning: "비단 위에 꽃을 더한다",
        explanation: "좋은 일에 또 좋은 일이 더해짐을 이른다.",
        example: "경치도 좋은데 음식까지 맛있으니 금상첨화다.",
        origin: "왕안석(王安石)의 시 즉사",
        category: C,
    },
    IdiomEntry {
        id: 35,
        script: "風前燈火",
        phonetic: "풍전등화",
        meaning: "바람 앞의 등불",
        explanation: "매우 위태로운 처지를 비유하는 말이다.",
        example: "적군에 포위된 성은 풍전등화의 운명이었다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 36,
        script: "山戰水戰",
        phonetic: "산전수전",
        meaning: "산에서도 싸우고 물에서도 싸웠다",
        explanation: "세상의 온갖 어려움을 다 겪었음을 이른다.",
        example: "산전수전 다 겪은 선배의 조언은 무게가 달랐다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
    IdiomEntry {
        id: 37,
        script: "天高馬肥",
        phonetic: "천고마비",
        meaning: "하늘은 높고 말은 살찐다",
        explanation: "하늘이 맑고 먹을 것이 풍성한 가을을 이르는 말이다.",
        example: "천고마비의 계절이라 산책하기 좋다.",
        origin: "한서(漢書) 흉노전",
        category: C,
    },
    IdiomEntry {
        id: 38,
        script: "日就月將",
        phonetic: "일취월장",
        meaning: "날로 나아가고 달로 발전한다",
        explanation: "실력이나 형편이 나날이 자라거나 발전함을 이른다.",
        example: "매일 연습하더니 피아노 실력이 일취월장했다.",
        origin: "시경(詩經) 주송 경지편",
        category: C,
    },
    IdiomEntry {
        id: 39,
        script: "萬頃蒼波",
        phonetic: "만경창파",
        meaning: "만 이랑의 푸른 물결",
        explanation: "한없이 넓고 푸른 바다를 이른다.",
        example: "뱃머리에 서니 만경창파가 눈앞에 펼쳐졌다.",
        origin: "한국 고전 시가",
        category: C,
    },
    IdiomEntry {
        id: 40,
        script: "雨後竹筍",
        phonetic: "우후죽순",
        meaning: "비 온 뒤에 솟는 죽순",
        explanation: "어떤 일이 한때 많이 생겨남을 이르는 말이다.",
        example: "역 주변에 카페가 우후죽순처럼 생겨났다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
];
