// ============================================================
// Layer 4 — Korean Customer-Service Cleaner
// ============================================================
// Rules for the GS SHOP customer-service dump:
//
//   filter_row      decide whether a Q/A row is usable
//   clean_answer    strip greetings, apologies and sign-offs
//   clean_question  strip jamo emoticons (ㅠㅠ, ㅋㅋ, ...)
//   filter_pos      drop particles, endings and symbols from
//                   POS-tagged tokens
//   extract_field   pull "<...>" values out of the question
//                   header (주문상태, 문의유형)
//   extract_body    pull the free text after "@내용 :"
//
// All patterns are compiled once on first use.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use std::sync::LazyLock;

use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern must compile"))
        .collect()
}

// ─── Row filtering ────────────────────────────────────────────────────────────

/// Boilerplate answers with no content at all.
static DROP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"상담(\s)*접수(\s)*후(\s)*재(\s)*문의",
        r"신속한(\s)*답변",
        r"(이미)(\s)*(답변)",
    ])
});

/// Answers that only defer the question (call-backs, hand-offs).
static REJECT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(업체|담당(\s)*부서)(.)*(확인|연락)(\s)*(하고|하여|중|후|요청)",
        r"(전화로)(\s)*(말씀)",
        r"(부재)(\s)*(중)(\s)*(이셔서)",
        r"(재(\s)*전화|재(\s)*연락)",
        r"(오늘)(.)*(확인)(.)*(어려워)",
    ])
});

/// What to do with one question/answer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerdict {
    /// Template answer; discard the row entirely
    Drop,
    /// Deferred answer or missing question; not usable for training
    Reject,
    Keep,
}

/// Classify a row. Drop patterns are checked before reject
/// patterns, and both before the missing-question check.
pub fn filter_row(question: Option<&str>, answer: &str) -> RowVerdict {
    if DROP_PATTERNS.iter().any(|re| re.is_match(answer)) {
        return RowVerdict::Drop;
    }
    if REJECT_PATTERNS.iter().any(|re| re.is_match(answer)) {
        return RowVerdict::Reject;
    }
    if question.is_none() {
        return RowVerdict::Reject;
    }
    RowVerdict::Keep
}

// ─── Answer / question cleaning ───────────────────────────────────────────────

/// Applied in order; each match is deleted.
static ANSWER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        concat!(
            r"((@[0-9]+@)|(오늘도)|(\\x1e)|(&#41;)|(죄송(\s)*합니다)|(안녕(\s)*하세요)",
            r"|(감사(\s)*합니다)|(고객님)((께서)|(께)|(이)|(의))*(\.|,|\s|!|~|\?)*",
            r"|(가장(\s)*좋은(\s)*선택)|(수고(\s)하세요)|(문의)(\s)*(주신|하신))+",
        ),
        r"(GS SHOP).{3,15}(입니다)(\.|,|!|~|\?)*",
        concat!(
            r"((좋은|행복한|즐거운|편안한|기쁨이 가득한)(\s)*(저녁|하루|주말|밤|오후|휴일|시간)(\s)*",
            r"(되세요|보내세요|되십시오|되시기 바랍니다))(\.|,|\s|!|~|\?)*",
        ),
        r"^(이용해)(\s)*(주셔서)",
        r"((이용)(.))*(참고)(.)*(부탁)(\s)*(드립니다)+(\.|,|\s|!|~|\?)*",
        r"((이용)(.))*(불편)(.)*((드려)|(드리게)(\s)*(되어)+)(\s)*(대단히)*",
        r"(기다리게|기다려)(\s)*(해서|해드려|주셔서)",
        r"((시간)*양해)(\s)*(부탁)(\s)*(드리며|드립니다)(\.|,|\s|!|~|\?)*",
        r"(기대).{2,6}(주문).{3,6}(실망).{3,6}(정말|너무|대단히|\s)",
        r"(저희(.))*(GS|gs)(\s)*(SHOP|shop).{3,5}(주문|구매).{3,10}(실망).{3,10}(정말|너무|대단히|\s)",
        r"(감기)+(\s)*(조심하시고)",
        r"도움(\s)*드리지(\s)*못(\s)*해",
        r"(저희(.))*(GS|gs)(\s)*(SHOP|shop).{1,3}(이용).{3,6}(진심.{3,6})*(\.|,|\s|!|~|\?)",
    ])
});

static QUESTION_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ㆍㅠㅜㅋㅎㅡ]+").expect("static pattern must compile"));

/// Remove agent boilerplate from an answer.
pub fn clean_answer(answer: &str) -> String {
    ANSWER_PATTERNS
        .iter()
        .fold(answer.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// Remove jamo emoticons from a question.
pub fn clean_question(question: &str) -> String {
    QUESTION_NOISE.replace_all(question, "").into_owned()
}

// ─── POS filtering ────────────────────────────────────────────────────────────

/// Sejong tags for endings, particles, numbers and symbols.
pub const DROPPED_POS_TAGS: &[&str] = &[
    "EP+EF", "ETM", "EC", "JKO", "SSC", "JKG", "JX", "JKB", "SN", "SC", "SY", "JSK", "SF",
    "SSO", "JKS", "EF", "EP", "VCP+EF",
];

/// Keep the surface form of every token whose tag is not dropped.
pub fn filter_pos<W, T>(tagged: &[(W, T)]) -> Vec<String>
where
    W: AsRef<str>,
    T: AsRef<str>,
{
    tagged
        .iter()
        .filter(|(_, tag)| !DROPPED_POS_TAGS.contains(&tag.as_ref()))
        .map(|(word, _)| word.as_ref().to_string())
        .collect()
}

// ─── Question header parsing ──────────────────────────────────────────────────

/// Structured fields embedded in the raw question header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// `주문상태 : <...>`
    OrderState,
    /// `문의유형 : <...>`
    InquiryType,
}

impl HeaderField {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderField::OrderState  => "주문상태",
            HeaderField::InquiryType => "문의유형",
        }
    }
}

static ORDER_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"주문상태 : <(.*?)>").expect("static pattern must compile"));
static INQUIRY_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"문의유형 : <(.*?)>").expect("static pattern must compile"));
static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@내용 : (.+?)$").expect("static pattern must compile"));

/// The `<...>` value of `field`, or `None` when absent or empty.
pub fn extract_field(field: HeaderField, question: &str) -> Option<String> {
    let re = match field {
        HeaderField::OrderState  => &*ORDER_STATE_RE,
        HeaderField::InquiryType => &*INQUIRY_TYPE_RE,
    };
    re.captures(question)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The free text after `@내용 : `, or `None`.
pub fn extract_body(question: &str) -> Option<String> {
    BODY_RE
        .captures(question)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_answers_are_dropped() {
        assert_eq!(filter_row(Some("q"), "상담 접수 후 재문의 부탁드립니다"), RowVerdict::Drop);
        assert_eq!(filter_row(Some("q"), "이미 답변 드렸습니다"), RowVerdict::Drop);
    }

    #[test]
    fn test_deferred_answers_are_rejected() {
        assert_eq!(filter_row(Some("q"), "담당 부서에 확인 요청 드렸습니다"), RowVerdict::Reject);
        assert_eq!(filter_row(Some("q"), "재 연락 드리겠습니다"), RowVerdict::Reject);
        assert_eq!(filter_row(Some("q"), "오늘은 확인이 어려워 내일"), RowVerdict::Reject);
    }

    #[test]
    fn test_drop_wins_over_reject() {
        // matches both a drop and a reject pattern
        assert_eq!(filter_row(Some("q"), "신속한 답변 못드려 재연락"), RowVerdict::Drop);
    }

    #[test]
    fn test_missing_question_is_rejected() {
        assert_eq!(filter_row(None, "배송은 내일 도착합니다"), RowVerdict::Reject);
        assert_eq!(filter_row(Some("언제 와요"), "배송은 내일 도착합니다"), RowVerdict::Keep);
    }

    #[test]
    fn test_clean_answer_strips_greetings() {
        let out = clean_answer("안녕하세요 고객님, 배송은 내일 도착합니다. 감사합니다");
        assert_eq!(out.trim(), "배송은 내일 도착합니다.");
    }

    #[test]
    fn test_clean_answer_strips_closing_wishes() {
        let out = clean_answer("교환 접수되었습니다. 행복한 하루 되세요!");
        assert_eq!(out.trim(), "교환 접수되었습니다.");
    }

    #[test]
    fn test_clean_answer_strips_markers() {
        assert_eq!(clean_answer("@12@환불 완료"), "환불 완료");
        assert_eq!(clean_answer(r"환불\x1e완료"), "환불완료");
    }

    #[test]
    fn test_clean_answer_boilerplate_table() {
        let cases = [
            ("시간양해 부탁 드립니다. 네", "네"),
            ("GS SHOP 고객센터 상담원입니다. 배송 안내드립니다", "배송 안내드립니다"),
            ("교환은 마이페이지에서 가능하니 참고 부탁 드립니다. 확인", "교환은 마이페이지에서 가능하니 확인"),
            ("배송 지연으로 불편을 드려 대단히 죄송합니다", "배송 지연으로"),
            ("환불 처리했습니다 감기 조심하시고 좋은 하루 되세요", "환불 처리했습니다"),
            ("원하시는 도움 드리지 못해 아쉽습니다", "원하시는 아쉽습니다"),
            ("오래 기다려 주셔서 감사합니다 출고되었습니다", "오래 출고되었습니다"),
        ];
        for (input, expected) in cases {
            let out = clean_answer(input);
            let out = out.split_whitespace().collect::<Vec<_>>().join(" ");
            assert_eq!(out, expected, "input: {input}");
        }
    }

    #[test]
    fn test_phone_and_absence_answers_are_rejected() {
        assert_eq!(filter_row(Some("q"), "전화로 말씀 주시면 안내해 드리겠습니다"), RowVerdict::Reject);
        assert_eq!(filter_row(Some("q"), "부재 중 이셔서 문자 남깁니다"), RowVerdict::Reject);
    }

    #[test]
    fn test_clean_question_strips_jamo() {
        assert_eq!(clean_question("언제 와요ㅠㅠ ㅋㅋ"), "언제 와요 ");
    }

    #[test]
    fn test_filter_pos_drops_particles() {
        let tagged = [("배송", "NNG"), ("은", "JX"), ("언제", "MAG"), ("?", "SF")];
        assert_eq!(filter_pos(&tagged), vec!["배송", "언제"]);
    }

    #[test]
    fn test_extract_header_fields() {
        let q = "주문상태 : <배송중> 문의유형 : <> @내용 : 언제 오나요";
        assert_eq!(extract_field(HeaderField::OrderState, q), Some("배송중".into()));
        assert_eq!(extract_field(HeaderField::InquiryType, q), None);
        assert_eq!(extract_body(q), Some("언제 오나요".into()));
        assert_eq!(extract_body("내용 없음"), None);
        assert_eq!(HeaderField::OrderState.label(), "주문상태");
    }
}
