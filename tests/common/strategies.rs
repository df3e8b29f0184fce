use proptest::prelude::*;

use member_search::search::MemberSearchCondition;

use super::builders::{MemberFixture, TEAM_NAMES};

const USERNAMES: [&str; 4] = ["member1", "member2", "member3", "member4"];

/// Usernames drawn from a small pool so equality filters actually hit
pub fn username_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(USERNAMES.to_vec()).prop_map(str::to_string))
}

pub fn member_fixture_strategy() -> impl Strategy<Value = MemberFixture> {
    (
        username_strategy(),
        0i32..60,
        prop::option::of(0usize..TEAM_NAMES.len()),
    )
        .prop_map(|(username, age, team)| MemberFixture {
            username,
            age,
            team,
        })
}

pub fn members_strategy() -> impl Strategy<Value = Vec<MemberFixture>> {
    prop::collection::vec(member_fixture_strategy(), 0..25)
}

/// Text filter values, including blanks that must behave as absent
fn text_filter_strategy(pool: Vec<&'static str>) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some(String::new())),
        1 => Just(Some("   ".to_string())),
        4 => prop::sample::select(pool).prop_map(|v| Some(v.to_string())),
    ]
}

pub fn condition_strategy() -> impl Strategy<Value = MemberSearchCondition> {
    (
        text_filter_strategy(USERNAMES.to_vec()),
        text_filter_strategy(TEAM_NAMES.to_vec()),
        prop::option::of(0i32..60),
        prop::option::of(0i32..60),
    )
        .prop_map(|(username, team_name, age_goe, age_loe)| MemberSearchCondition {
            username,
            team_name,
            age_goe,
            age_loe,
        })
}

/// Condition with every field absent or blank
pub fn unrestricted_condition_strategy() -> impl Strategy<Value = MemberSearchCondition> {
    let blank = prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some(" \t".to_string())),
    ];
    (blank.clone(), blank).prop_map(|(username, team_name)| MemberSearchCondition {
        username,
        team_name,
        age_goe: None,
        age_loe: None,
    })
}

/// (page, size)
pub fn page_window_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..6, 1u32..8)
}
