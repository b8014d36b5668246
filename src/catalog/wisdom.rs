// Catalog: 삶과 지혜
use super::{Category, IdiomEntry};

const C: Category = Category::Wisdom;

pub(super) const WISDOM: &[IdiomEntry] = &[
    IdiomEntry {
        id: 1,
        script: "塞翁之馬",
        phonetic: "새옹지마",
        meaning: "인생의 길흉화복은 변화가 많아 예측하기 어렵다",
        explanation: "변방 노인의 말이 달아났다 돌아오며 화와 복이 거듭 뒤바뀐 이야기에서 나왔다.",
        example: "시험에 떨어졌지만 새옹지마라고, 더 좋은 기회가 올 거야.",
        origin: "회남자(淮南子) 인간훈",
        category: C,
    },
    IdiomEntry {
        id: 2,
        script: "過猶不及",
        phonetic: "과유불급",
        meaning: "정도를 지나침은 미치지 못함과 같다",
        explanation: "공자가 제자 자장과 자하를 비교하며 지나침과 모자람이 다르지 않다고 한 말이다.",
        example: "운동도 과유불급이니 무리하지 말고 꾸준히 하자.",
        origin: "논어(論語) 선진편",
        category: C,
    },
    IdiomEntry {
        id: 3,
        script: "有備無患",
        phonetic: "유비무환",
        meaning: "미리 준비가 되어 있으면 걱정할 것이 없다",
        explanation: "평소에 대비해 두면 뜻밖의 일이 닥쳐도 근심할 일이 없다는 가르침이다.",
        example: "유비무환이라고, 장마 전에 배수로를 미리 점검해 두었다.",
        origin: "서경(書經) 열명편",
        category: C,
    },
    IdiomEntry {
        id: 4,
        script: "事必歸正",
        phonetic: "사필귀정",
        meaning: "모든 일은 반드시 바른길로 돌아간다",
        explanation: "한때 그릇된 것이 이기는 듯해도 결국 옳은 이치대로 된다는 뜻이다.",
        example: "진실이 밝혀졌으니 결국 사필귀정이다.",
        origin: "한국 속담에서 굳어진 말",
        category: C,
    },
    IdiomEntry {
        id: 5,
        script: "轉禍爲福",
        phonetic: "전화위복",
        meaning: "재앙이 바뀌어 오히려 복이 된다",
        explanation: "어려운 일을 슬기롭게 넘기면 도리어 좋은 결과를 얻는다는 말이다.",
        example: "그때의 실패가 전화위복이 되어 새 사업을 시작할 수 있었다.",
        origin: "전국책(戰國策) 연책",
        category: C,
    },
    IdiomEntry {
        id: 6,
        script: "苦盡甘來",
        phonetic: "고진감래",
        meaning: "쓴 것이 다하면 단 것이 온다",
        explanation: "고생 끝에 즐거움이 온다는 뜻으로, 참고 견디라는 격려로 쓰인다.",
        example: "고진감래라더니 삼 년 노력 끝에 합격 소식을 들었다.",
        origin: "중국 민간 격언",
        category: C,
    },
    IdiomEntry {
        id: 7,
        script: "溫故知新",
        phonetic: "온고지신",
        meaning: "옛것을 익히고 그것을 미루어 새것을 안다",
        explanation: "공자가 스승의 자격으로 든 말로, 배운 것을 되새겨 새 이치를 깨닫는다는 뜻이다.",
        example: "온고지신의 자세로 전통 기술을 현대 디자인에 접목했다.",
        origin: "논어(論語) 위정편",
        category: C,
    },
    IdiomEntry {
        id: 8,
        script: "一石二鳥",
        phonetic: "일석이조",
        meaning: "돌 하나로 새 두 마리를 잡는다",
        explanation: "한 가지 일로 두 가지 이득을 본다는 뜻이다.",
        example: "자전거 출퇴근은 운동도 되고 교통비도 아끼니 일석이조다.",
        origin: "서양 속담의 한자 번역",
        category: C,
    },
    IdiomEntry {
        id: 9,
        script: "自業自得",
        phonetic: "자업자득",
        meaning: "자기가 저지른 일의 결과를 자기가 받는다",
        explanation: "불교에서 자신이 지은 업보를 자신이 받는다는 데서 나온 말이다.",
        example: "밤새 게임하다 지각했으니 자업자득이지.",
        origin: "정법념처경(正法念處經)",
        category: C,
    },
    IdiomEntry {
        id: 10,
        script: "結者解之",
        phonetic: "결자해지",
        meaning: "맺은 사람이 풀어야 한다",
        explanation: "일을 벌인 사람이 그 일을 끝맺어야 한다는 뜻이다.",
        example: "결자해지라고, 문제를 만든 팀이 직접 수습에 나섰다.",
        origin: "순오지(旬五志)",
        category: C,
    },
];
