// src/protocol.rs

// Wire-level form bodies for the five screens. The engine is strict about
// field names and ordering; a misspelled field does not fail the request, it
// just yields zero results. Treat everything in here as a pinned external
// fixture.

pub const PAGE_SIZE: u32 = 10_000;

pub const FIRST_AUTHENTIC_WORK: u32 = 0;
pub const LAST_AUTHENTIC_WORK: u32 = 114;

/// Step 2: pick the headword.
pub fn term_body(text: &str) -> String {
    format!("text={text}&Form.option.terms=terms")
}

/// Step 3: pick the inflected forms. The form code doubles as the index into
/// the engine's nested form array.
pub fn forms_body(text: &str, forms: &[u32]) -> String {
    let mut body = format!("text={text}&Form.option.works=works");
    for form in forms {
        body.push_str(&format!(
            "&terms%5B0%5D.listedLemmata%5B0%5D.listedFormae%5B{form}%5D.selected=on"
        ));
    }
    body
}

/// Step 4: select every authentic work. Always the full 0–114 range, never a
/// subset.
pub fn works_body(text: &str) -> String {
    let mut body = format!("text={text}&Form.option.options=options");
    for i in FIRST_AUTHENTIC_WORK..=LAST_AUTHENTIC_WORK {
        body.push_str(&format!("&listedWorks%5B{i}%5D.selected=on"));
    }
    body
}

/// Step 5: request the concordances page.
pub fn concordances_body(text: &str) -> String {
    format!("text={text}{CONCORDANCES}")
}

/// The fixed search configuration appended to the concordances request:
/// 10000 results per page, not exhaustive, no ordering constraint between
/// term occurrences, all textual units and authorship categories, every
/// homograph match option, 2 lines/records of context.
pub const CONCORDANCES: &str = concat!(
    "&exhaustive=false",
    "&asyndetonAll=true",
    "&ordered=false",
    "&minWordsBetweenTermsNoOrder=0",
    "&maxWordsBetweenTermsNoOrder=0",
    "&minWordsBetweenTermsInOrder=0",
    "&maxWordsBetweenTermsInOrder=0",
    "&allTextualUnits=true",
    "&textualUnits.booleanOptions%5B0%5D.selected=on",
    "&textualUnits.booleanOptions%5B1%5D.selected=on",
    "&textualUnits.booleanOptions%5B2%5D.selected=on",
    "&textualUnits.booleanOptions%5B3%5D.selected=on",
    "&textualUnits.booleanOptions%5B4%5D.selected=on",
    "&textualUnits.booleanOptions%5B5%5D.selected=on",
    "&textualUnits.booleanOptions%5B6%5D.selected=on",
    "&textualUnits.booleanOptions%5B7%5D.selected=on",
    "&textualUnits.booleanOptions%5B8%5D.selected=on",
    "&textualUnits.booleanOptions%5B9%5D.selected=on",
    "&divideByPeriods=false",
    "&authorshipAll=true",
    "&divideByAuthorship=false",
    "&authorship.booleanOptions%5B0%5D.selected=on",
    "&authorship.booleanOptions%5B1%5D.selected=on",
    "&authorship.booleanOptions%5B2%5D.selected=on",
    "&authorship.booleanOptions%5B3%5D.selected=on",
    "&authorship.booleanOptions%5B4%5D.selected=on",
    "&authorship.booleanOptions%5B5%5D.selected=on",
    "&results.pageSize=10000",
    "&results.presentation=1",
    "&results.additionalPeriods=0",
    "&results.additionalLines=2",
    "&results.includePosition=false",
    "&results.additionalRecords=2",
    "&matchOptions.options%5B0%5D.homographsOnly=true",
    "&matchOptions.options%5B0%5D.booleanOptions%5B0%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B1%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B2%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B3%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B4%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B5%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B6%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B7%5D.selected=on",
    "&matchOptions.options%5B0%5D.booleanOptions%5B8%5D.selected=on",
    "&matchOptions.options%5B1%5D.homographsOnly=true",
    "&matchOptions.options%5B1%5D.booleanOptions%5B0%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B1%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B2%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B3%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B4%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B5%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B6%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B7%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B8%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B9%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B10%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B11%5D.selected=on",
    "&matchOptions.options%5B1%5D.booleanOptions%5B12%5D.selected=on",
    "&matchOptions.options%5B2%5D.homographsOnly=true",
    "&matchOptions.options%5B2%5D.booleanOptions%5B0%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B1%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B2%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B3%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B4%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B5%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B6%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B7%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B8%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B9%5D.selected=on",
    "&matchOptions.options%5B2%5D.booleanOptions%5B10%5D.selected=on",
    "&matchOptions.options%5B3%5D.homographsOnly=true",
    "&matchOptions.options%5B3%5D.booleanOptions%5B0%5D.selected=on",
    "&matchOptions.options%5B3%5D.booleanOptions%5B1%5D.selected=on",
    "&matchOptions.options%5B3%5D.booleanOptions%5B2%5D.selected=on",
    "&matchOptions.options%5B3%5D.booleanOptions%5B3%5D.selected=on",
    "&matchOptions.options%5B4%5D.homographsOnly=true",
    "&matchOptions.options%5B4%5D.booleanOptions%5B0%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B1%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B2%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B3%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B4%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B5%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B6%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B7%5D.selected=on",
    "&matchOptions.options%5B4%5D.booleanOptions%5B8%5D.selected=on",
    "&divisionNumber=2",
    "&Form.option.concordances=concordances",
);

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    // The template is an external fixture. This pins its shape so that an
    // accidental edit shows up as a test failure, not as an empty result set.
    #[test]
    fn concordances_template_is_stable() {
        assert!(CONCORDANCES.starts_with("&exhaustive=false&asyndetonAll=true"));
        assert!(CONCORDANCES.ends_with("&Form.option.concordances=concordances"));
        assert!(CONCORDANCES.contains(&format!("&results.pageSize={PAGE_SIZE}")));
        assert!(CONCORDANCES.contains("&results.additionalLines=2"));
        assert!(CONCORDANCES.contains("&results.additionalRecords=2"));
        assert!(CONCORDANCES.contains("&divisionNumber=2"));
        assert_eq!(count(CONCORDANCES, ".selected=on"), 62);
        assert_eq!(count(CONCORDANCES, ".homographsOnly=true"), 5);
        assert_eq!(count(CONCORDANCES, "textualUnits.booleanOptions"), 10);
        assert_eq!(count(CONCORDANCES, "authorship.booleanOptions"), 6);
    }

    #[test]
    fn term_body_shape() {
        assert_eq!(term_body("ens"), "text=ens&Form.option.terms=terms");
    }

    #[test]
    fn forms_body_uses_code_as_index() {
        let body = forms_body("ens", &[78, 79]);
        assert!(body.starts_with("text=ens&Form.option.works=works"));
        assert!(body.contains(
            "&terms%5B0%5D.listedLemmata%5B0%5D.listedFormae%5B78%5D.selected=on"
        ));
        assert!(body.ends_with(
            "&terms%5B0%5D.listedLemmata%5B0%5D.listedFormae%5B79%5D.selected=on"
        ));
    }

    #[test]
    fn works_body_selects_all_115_works() {
        let body = works_body("ens");
        assert!(body.starts_with("text=ens&Form.option.options=options"));
        assert_eq!(count(&body, "&listedWorks%5B"), 115);
        assert!(body.contains("&listedWorks%5B0%5D.selected=on"));
        assert!(body.ends_with("&listedWorks%5B114%5D.selected=on"));
    }

    #[test]
    fn concordances_body_prefixes_text() {
        let body = concordances_body("ens");
        assert!(body.starts_with("text=ens&exhaustive=false"));
        assert!(body.ends_with("&Form.option.concordances=concordances"));
    }
}
