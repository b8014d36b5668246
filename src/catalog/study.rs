// Catalog: 학문과 노력
use super::{Category, IdiomEntry};

const C: Category = Category::Study;

pub(super) const STUDY: &[IdiomEntry] = &[
    IdiomEntry {
        id: 11,
        script: "螢雪之功",
        phonetic: "형설지공",
        meaning: "반딧불과 눈빛으로 글을 읽어 이룬 공",
        explanation: "가난한 차윤은 반딧불로, 손강은 눈빛으로 책을 읽어 입신한 데서 나온 말이다.",
        example: "형설지공 끝에 그는 마침내 박사 학위를 받았다.",
        origin: "진서(晉書) 차윤전",
        category: C,
    },
    IdiomEntry {
        id: 12,
        script: "愚公移山",
        phonetic: "우공이산",
        meaning: "어리석은 노인이 산을 옮긴다",
        explanation: "쉬지 않고 꾸준히 하면 큰일도 이룰 수 있다는 뜻이다.",
        example: "하루 한 쪽씩 번역한 것이 우공이산처럼 책 한 권이 되었다.",
        origin: "열자(列子) 탕문편",
        category: C,
    },
    IdiomEntry {
        id: 13,
        script: "磨斧作針",
        phonetic: "마부작침",
        meaning: "도끼를 갈아 바늘을 만든다",
        explanation: "어린 이백이 도끼를 가는 노파를 보고 학업을 다시 시작했다는 이야기에서 나왔다.",
        example: "마부작침의 마음으로 매일 한 시간씩 연습했다.",
        origin: "방여승람(方輿勝覽)",
        category: C,
    },
    IdiomEntry {
        id: 14,
        script: "手不釋卷",
        phonetic: "수불석권",
        meaning: "손에서 책을 놓지 않는다",
        explanation: "늘 책을 가까이하며 열심히 공부함을 이른다.",
        example: "할아버지는 여든이 넘어서도 수불석권하신다.",
        origin: "삼국지(三國志) 오지 여몽전",
        category: C,
    },
    IdiomEntry {
        id: 15,
        script: "刮目相對",
        phonetic: "괄목상대",
        meaning: "눈을 비비고 다시 보며 상대를 대한다",
        explanation: "남의 학식이나 재주가 몰라보게 나아졌음을 이르는 말이다.",
        example: "방학 동안 실력이 늘어 친구들이 괄목상대했다.",
        origin: "삼국지(三國志) 오지 여몽전",
        category: C,
    },
    IdiomEntry {
        id: 16,
        script: "靑出於藍",
        phonetic: "청출어람",
        meaning: "푸른색은 쪽에서 나왔지만 쪽보다 더 푸르다",
        explanation: "제자가 스승보다 나음을 비유하는 말이다.",
        example: "스승을 꺾고 우승하다니 청출어람이 따로 없다.",
        origin: "순자(荀子) 권학편",
        category: C,
    },
    IdiomEntry {
        id: 17,
        script: "大器晩成",
        phonetic: "대기만성",
        meaning: "큰 그릇은 늦게 이루어진다",
        explanation: "크게 될 사람은 늦게라도 성공한다는 뜻이다.",
        example: "마흔에 첫 책을 낸 그는 대기만성형 작가다.",
        origin: "노자(老子) 41장",
        category: C,
    },
    IdiomEntry {
        id: 18,
        script: "晝耕夜讀",
        phonetic: "주경야독",
        meaning: "낮에는 밭을 갈고 밤에는 글을 읽는다",
        explanation: "바쁜 틈에도 꿋꿋이 공부함을 이른다.",
        example: "그는 주경야독하며 야간 대학을 마쳤다.",
        origin: "위서(魏書) 최광전",
        category: C,
    },
    IdiomEntry {
        id: 19,
        script: "切磋琢磨",
        phonetic: "절차탁마",
        meaning: "옥과 돌을 자르고 갈고 쪼고 닦는다",
        explanation: "학문과 덕행을 부지런히 닦음을 이르는 말이다.",
        example: "동료들과 절차탁마하며 논문을 완성했다.",
        origin: "시경(詩經) 위풍 기욱편",
        category: C,
    },
    IdiomEntry {
        id: 20,
        script: "學而時習",
        phonetic: "학이시습",
        meaning: "배우고 때때로 익힌다",
        explanation: "논어의 첫 구절로, 배운 것을 거듭 익히는 기쁨을 말한다.",
        example: "학이시습의 자세로 매일 단어를 복습한다.",
        origin: "논어(論語) 학이편",
        category: C,
    },
];
