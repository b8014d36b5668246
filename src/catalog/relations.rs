// Catalog: 인간관계
use super::{Category, IdiomEntry};

const C: Category = Category::Relations;

pub(super) const RELATIONS: &[IdiomEntry] = &[
    IdiomEntry {
        id: 21,
        script: "管鮑之交",
        phonetic: "관포지교",
        meaning: "관중과 포숙아의 사귐",
        explanation: "서로를 깊이 이해하고 믿는 친구 사이의 두터운 우정을 이른다.",
        example: "두 사람은 관포지교라 할 만큼 서로를 믿는다.",
        origin: "사기(史記) 관안열전",
        category: C,
    },
    IdiomEntry {
        id: 22,
        script: "易地思之",
        phonetic: "역지사지",
        meaning: "처지를 바꾸어 생각한다",
        explanation: "상대의 입장에서 헤아려 보라는 뜻이다.",
        example: "역지사지로 생각하면 그 사람이 왜 화났는지 알 수 있다.",
        origin: "맹자(孟子) 이루편",
        category: C,
    },
    IdiomEntry {
        id: 23,
        script: "同病相憐",
        phonetic: "동병상련",
        meaning: "같은 병을 앓는 사람끼리 서로 가엾게 여긴다",
        explanation: "어려운 처지에 있는 사람끼리 서로 동정함을 이른다.",
        example: "같은 날 낙방한 두 친구는 동병상련의 정을 나눴다.",
        origin: "오월춘추(吳越春秋)",
        category: C,
    },
    IdiomEntry {
        id: 24,
        script: "以心傳心",
        phonetic: "이심전심",
        meaning: "마음에서 마음으로 전한다",
        explanation: "말하지 않아도 서로 뜻이 통함을 이르는 말이다.",
        example: "눈빛만 봐도 이심전심으로 통하는 사이다.",
        origin: "전등록(傳燈錄)",
        category: C,
    },
    IdiomEntry {
        id: 25,
        script: "竹馬故友",
        phonetic: "죽마고우",
        meaning: "대나무 말을 타고 놀던 옛 벗",
        explanation: "어릴 때부터 함께 자란 오랜 친구를 이른다.",
        example: "그는 결혼식 사회를 죽마고우에게 부탁했다.",
        origin: "세설신어(世說新語) 품조편",
        category: C,
    },
    IdiomEntry {
        id: 26,
        script: "水魚之交",
        phonetic: "수어지교",
        meaning: "물과 물고기의 사귐",
        explanation: "유비가 제갈량과의 사이를 물과 물고기에 빗댄 데서 나왔다.",
        example: "감독과 주장은 수어지교처럼 떼려야 뗄 수 없는 사이다.",
        origin: "삼국지(三國志) 촉지 제갈량전",
        category: C,
    },
    IdiomEntry {
        id: 27,
        script: "莫逆之友",
        phonetic: "막역지우",
        meaning: "거스름이 없는 벗",
        explanation: "허물없이 아주 친한 친구를 이른다.",
        example: "둘은 대학 시절부터 막역지우로 지내 왔다.",
        origin: "장자(莊子) 대종사편",
        category: C,
    },
    IdiomEntry {
        id: 28,
        script: "結草報恩",
        phonetic: "결초보은",
        meaning: "풀을 묶어 은혜를 갚는다",
        explanation: "죽어서도 잊지 않고 은혜를 갚는다는 뜻이다.",
        example: "도와주신 은혜는 결초보은하겠습니다.",
        origin: "춘추좌씨전(春秋左氏傳) 선공편",
        category: C,
    },
    IdiomEntry {
        id: 29,
        script: "金蘭之交",
        phonetic: "금란지교",
        meaning: "쇠처럼 단단하고 난초처럼 향기로운 사귐",
        explanation: "친구 사이의 매우 두터운 우정을 이른다.",
        example: "평생을 함께한 두 화가의 우정은 금란지교였다.",
        origin: "주역(周易) 계사전",
        category: C,
    },
    IdiomEntry {
        id: 30,
        script: "人之常情",
        phonetic: "인지상정",
        meaning: "사람이라면 누구나 가지는 보통의 마음",
        explanation: "누구라도 그렇게 느끼고 생각하는 것이 당연하다는 뜻이다.",
        example: "어려운 이웃을 돕고 싶은 것은 인지상정이다.",
        origin: "한국에서 두루 쓰는 말",
        category: C,
    },
];
