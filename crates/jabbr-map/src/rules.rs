//! Dictionary of common scholarly-word abbreviations.

/// Word to abbreviation pairs, matched case-insensitively on whole tokens.
pub const ABBREVIATION_RULES: &[(&str, &str)] = &[
    ("Computer", "Comp."),
    ("Research", "Res."),
    ("Clinical", "Clin."),
    ("International", "Int."),
    ("Journal", "J."),
    ("Science", "Sci."),
    ("Technology", "Technol."),
    ("Engineering", "Eng."),
    ("Medicine", "Med."),
    ("Review", "Rev."),
    ("Studies", "Stud."),
    ("Physics", "Phys."),
    ("Chemistry", "Chem."),
    ("Biology", "Biol."),
    ("Mathematics", "Math."),
    ("Applications", "Appl."),
    ("Systems", "Syst."),
    ("Analysis", "Anal."),
    ("Education", "Educ."),
    ("Management", "Manag."),
    ("Economics", "Econ."),
    ("Multidisciplinary", "Multidiscip."),
    ("Environmental", "Environ."),
    ("Administration", "Adm."),
    ("General", "Gen."),
    ("Experimental", "Exp."),
    ("Applied", "Appl."),
    ("Developmental", "Dev."),
    ("Artificial", "AI"),
    ("Intelligence", "Intell."),
    ("Data", "Data"),
    ("Analytics", "Analyt."),
    ("Computational", "Comp."),
    ("Quantum", "Quant."),
    ("Neuroscience", "Neuro."),
    ("Genetics", "Genet."),
    ("Immunology", "Immunol."),
    ("Pharmacology", "Pharmacol."),
    ("Psychology", "Psychol."),
    ("Sociology", "Soc."),
    ("Anthropology", "Anthro."),
    ("Linguistics", "Ling."),
    ("History", "Hist."),
    ("Philosophy", "Phil."),
];

/// Looks up the abbreviation for a single word.
pub fn find_abbreviation(word: &str) -> Option<&'static str> {
    ABBREVIATION_RULES
        .iter()
        .find(|(full, _)| full.eq_ignore_ascii_case(word))
        .map(|(_, abbr)| *abbr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_abbreviation("journal"), Some("J."));
        assert_eq!(find_abbreviation("SCIENCE"), Some("Sci."));
        assert_eq!(find_abbreviation("Artificial"), Some("AI"));
        assert_eq!(find_abbreviation("Of"), None);
        assert_eq!(find_abbreviation(""), None);
    }

    #[test]
    fn rule_words_are_unique() {
        for (idx, (word, _)) in ABBREVIATION_RULES.iter().enumerate() {
            let duplicate = ABBREVIATION_RULES[idx + 1..]
                .iter()
                .any(|(other, _)| other.eq_ignore_ascii_case(word));
            assert!(!duplicate, "duplicate rule for {word}");
        }
    }
}
