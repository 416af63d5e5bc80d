//! Keyword table used to infer criterion importance from free-text context.
//!
//! Keywords are literal Korean/English terms. Matching is substring based and
//! case-insensitive; see [`super::KeywordWeighting`]. `convenience` has no
//! entries and is therefore never boosted by context.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const COST: &[&str] = &[
    "돈", "가격", "비용", "비싸", "비쌈", "비싸다", "저렴", "싸다", "쌈", "예산", "지출", "부담", "가성비", "월급",
    "생활비", "결제", "할인", "환불", "유지비", "고정비", "변동비", "금액", "액수", "단가", "총액", "원가", "정가", "시세",
    "물가", "인상", "인하", "폭등", "폭락", "오른다", "내린다", "고가", "저가", "프리미엄", "지불", "카드값", "청구",
    "청구서", "영수증", "송금", "이체", "입금", "출금", "선결제", "후불", "할부", "무이자", "일시불", "자동이체", "구독",
    "정기결제", "결제일", "운영비", "관리비", "사용료", "이용료", "수수료", "인건비", "재료비", "교통비", "식비", "숙박비",
    "렌탈", "대여", "임대", "보증금", "월세", "연회비", "가입비", "세금", "부가세", "관세", "배송비", "배달비", "택배비",
    "추가요금", "옵션비", "숨은비용", "비용발생", "절약", "아끼다", "과소비", "돈나감", "돈깨짐", "쿠폰", "프로모션", "이벤트가",
    "특가", "캐시백", "적립", "포인트", "취소수수료", "위약금", "환불불가", "반환", "반품", "교환",
];

const TIME: &[&str] = &[
    "시간", "바쁨", "마감", "급함", "촉박", "늦음", "늦다", "빨리", "asap", "일정", "스케줄", "데드라인", "여유 없음",
    "쫓김", "당장", "지금", "이번 주", "오늘", "긴급", "급히", "급하게", "즉시", "당일", "오늘내", "내일까지", "서둘러",
    "재촉", "코앞", "코앞임", "기한", "기한내", "제출", "제출기한", "마감일", "D-day", "기한지남", "늦을듯", "일정잡기",
    "조율", "약속", "미팅", "회의", "면접", "수업", "출근", "통학", "겹침", "겹쳐", "충돌", "시간없다", "시간없음",
    "시간 없", "여유없다", "여유없음", "틈이없다", "짬이없다", "딜레이", "지연", "늦어짐", "밀림", "대기", "기다림", "소요",
    "소요시간", "걸리는시간", "단시간", "반나절", "하루종일",
];

const EFFORT: &[&str] = &[
    "피곤", "체력", "힘듦", "귀찮", "번거롭", "힘들다", "지침", "피로", "부담됨", "벅참", "오래 걸림", "빡셈", "에너지",
    "집중력", "체력 소모", "녹초", "탈진", "컨디션", "지치다", "지쳐", "기운없", "무기력", "번아웃", "멘붕", "졸림", "잠와",
    "수면부족", "번거로움", "손이많이감", "손이", "절차가많다", "단계가많다", "복잡", "번잡", "난이도", "노가다", "반복작업",
    "작업량", "할일많다", "공수", "리소스", "투입", "품", "품이듦", "손품", "발품", "집중안됨", "머리아픔", "신경쓰임", "압박",
    "부담감", "버겁", "힘빠짐", "지긋지긋",
];

const RISK: &[&str] = &[
    "리스크", "불안", "망할", "실패", "위험", "손해", "후회", "불확실", "걱정", "문제", "트러블", "깨짐", "안 될까",
    "틀릴까", "무서움", "리턴 없음", "복구 불가", "터짐", "터졌다", "오류", "에러", "버그", "문제생김", "장애", "다운",
    "먹통", "꼬임", "망가짐", "손상", "유실", "데이터날림", "애매", "확신없", "찜찜", "꺼림칙", "규정", "정책", "약관",
    "위반", "제재", "밴", "신고", "저작권", "법적", "평판", "이미지", "신뢰하락", "보안", "해킹", "유출", "개인정보",
    "계정", "도용", "피싱", "스팸", "돌이킬수없", "치명적", "큰일", "돌발", "폭탄",
];

const ENJOYMENT: &[&str] = &[
    "재밌", "즐거움", "만족", "하고 싶다", "끌림", "흥미", "재미", "기분", "행복", "스트레스 해소", "쉬고 싶다", "신남",
    "설렘", "기대", "뿌듯", "만족감", "재밌다", "재밌을듯", "끌린다", "땡긴다", "하고싶어", "휴식", "힐링", "리프레시",
    "기분전환", "스트레스풀", "놀고싶", "여행가고싶", "취향", "내스타일", "마음에듦", "맘에들", "만족스럽", "노잼", "재미없",
    "하기싫", "별로", "지겹", "질림",
];

const BENEFIT: &[&str] = &[
    "성장", "도움이", "배움", "실력", "경험", "커리어", "의미", "가치", "남는 게", "얻는 것", "장점", "배우다", "학습",
    "공부", "익히다", "숙련", "실력늘", "실력향상", "훈련", "인사이트", "깨달음", "이해", "성과", "효율", "생산성", "시간절약",
    "자동화", "최적화", "유용", "이득", "이점", "메리트", "스펙", "포트폴리오", "이력서", "경력", "어필", "취업", "이직",
    "승진", "네트워킹", "인맥", "레퍼런스", "남는거", "얻는다", "발전", "수익", "돈된다", "ROI", "투자대비", "효과좋",
];

const REVERSIBILITY: &[&str] = &[
    "취소", "되돌리기", "복구", "다시", "실험", "테스트", "한 번", "잠깐", "임시", "롤백", "복원", "리셋", "원복", "백업",
    "스냅샷", "체크포인트", "세이브", "시범", "파일럿", "트라이", "찍먹", "맛보기", "프로토타입", "PoC", "베타", "체험판",
    "안전장치", "보험", "플랜B", "대안", "예비", "대비", "철회", "중단", "그만두다", "접다", "빠져나오다", "무난", "안정",
    "안정적", "리스크적다", "부담적다", "가볍게", "가볍다",
];

/// A keyword with its lower-cased and whitespace-free forms precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreparedKeyword {
    pub lowered: String,
    pub compact: String,
}

impl PreparedKeyword {
    fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let compact = strip_whitespace(&lowered);
        Self { lowered, compact }
    }
}

/// Removes every whitespace character.
pub(crate) fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Criterion id to raw keywords.
const RAW_TABLE: &[(&str, &[&str])] = &[
    ("cost", COST),
    ("time", TIME),
    ("effort", EFFORT),
    ("risk", RISK),
    ("enjoyment", ENJOYMENT),
    ("benefit", BENEFIT),
    ("reversibility", REVERSIBILITY),
];

/// Criterion id to prepared keywords, built once on first use.
pub(crate) static KEYWORD_TABLE: Lazy<HashMap<&'static str, Vec<PreparedKeyword>>> =
    Lazy::new(|| {
        RAW_TABLE
            .iter()
            .map(|(id, words)| (*id, words.iter().map(|w| PreparedKeyword::new(w)).collect()))
            .collect()
    });
