//! Cross-language catalogue checks.
//!
//! The two content trees are maintained by hand; nothing at runtime notices
//! when they drift apart. These tests are the check that turns a missing or
//! extra entry in one language into a build failure instead of a silently
//! blank section.

use folio_content::{Catalogue, Lang, catalogue, parse_catalogue};

fn trees() -> (&'static Catalogue, &'static Catalogue) {
    (catalogue(Lang::En), catalogue(Lang::Fa))
}

#[test]
fn both_languages_deserialize_into_the_shared_schema() {
    for lang in [Lang::En, Lang::Fa] {
        parse_catalogue(lang).unwrap_or_else(|e| panic!("{e}"));
    }
}

#[test]
fn list_sections_have_matching_lengths() {
    let (en, fa) = trees();
    assert_eq!(en.hero.stats.len(), fa.hero.stats.len());
    assert_eq!(
        en.about.achievements_list.len(),
        fa.about.achievements_list.len()
    );
    assert_eq!(
        en.about.experience_list.len(),
        fa.about.experience_list.len()
    );
    assert_eq!(en.projects.list.len(), fa.projects.list.len());
}

#[test]
fn experience_entries_agree_on_responsibility_counts() {
    let (en, fa) = trees();
    for (e, f) in en.about.experience_list.iter().zip(&fa.about.experience_list) {
        assert_eq!(
            e.responsibilities.len(),
            f.responsibilities.len(),
            "responsibility count differs for {} / {}",
            e.company,
            f.company
        );
    }
}

#[test]
fn project_ids_are_identical_in_identical_order() {
    let (en, fa) = trees();
    let en_ids: Vec<u32> = en.projects.list.iter().map(|p| p.id).collect();
    let fa_ids: Vec<u32> = fa.projects.list.iter().map(|p| p.id).collect();
    assert_eq!(en_ids, fa_ids);
}

#[test]
fn gallery_holds_twelve_projects_with_sequential_ids() {
    let (en, _) = trees();
    assert_eq!(en.projects.list.len(), 12);
    let ids: Vec<u32> = en.projects.list.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    // Position 7 carries id 7 in both trees, as the views index by id.
    let (en, fa) = trees();
    assert_eq!(en.projects.list[6].id, 7);
    assert_eq!(fa.projects.list[6].id, 7);
}

#[test]
fn project_categories_and_tech_stacks_match_across_languages() {
    let (en, fa) = trees();
    for (e, f) in en.projects.list.iter().zip(&fa.projects.list) {
        assert_eq!(e.category, f.category, "category differs for project {}", e.id);
        assert_eq!(
            e.tech, f.tech,
            "tech stack differs for project {} (tech names are not translated)",
            e.id
        );
    }
}

#[test]
fn persian_tree_carries_persian_numerals() {
    let (_, fa) = trees();
    // Pre-localized by the catalogue; the store never transliterates.
    assert!(fa.hero.stats[0].value.contains('۵'));
    assert!(fa.footer.year.chars().all(|c| ('۰'..='۹').contains(&c)));
}
