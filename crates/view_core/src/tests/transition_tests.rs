use super::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn settled_transition_renders_the_page_fully() {
    let transition = PageTransition::new(Page::News);
    assert_eq!(transition.frame(10.0), PageFrame::settled(Page::News));
    assert!(!transition.is_animating(10.0));
}

#[test]
fn requesting_the_current_page_is_a_no_op() {
    let mut transition = PageTransition::new(Page::Company);
    assert!(!transition.request(Page::Company, 1.0));
    assert_eq!(transition.phase_at(1.0), TransitionPhase::Settled(Page::Company));
}

#[test]
fn outgoing_page_exits_before_incoming_page_enters() {
    let mut transition = PageTransition::new(Page::News);
    assert!(transition.request(Page::Company, 0.0));

    let exiting = transition.frame(0.25);
    assert_eq!(exiting.page, Page::News);
    assert!(approx(exiting.opacity, 0.5));
    assert!(approx(exiting.offset_x, 50.0), "news exits towards +x");

    let entering = transition.frame(0.75);
    assert_eq!(entering.page, Page::Company);
    assert!(approx(entering.opacity, 0.5));
    assert!(approx(entering.offset_x, 50.0), "company enters from +x");

    assert_eq!(transition.frame(1.0), PageFrame::settled(Page::Company));
    assert!(!transition.is_animating(1.0));
}

#[test]
fn search_pages_exit_left_and_news_enters_from_left() {
    let mut transition = PageTransition::new(Page::Project);
    transition.request(Page::News, 0.0);

    let exiting = transition.frame(0.25);
    assert_eq!(exiting.page, Page::Project);
    assert!(exiting.offset_x < 0.0);

    let entering = transition.frame(0.6);
    assert_eq!(entering.page, Page::News);
    assert!(entering.offset_x < 0.0);
}

#[test]
fn mounting_plays_the_initial_enter() {
    let transition = PageTransition::mounting(Page::News, 2.0);
    let start = transition.frame(2.0);
    assert_eq!(start.page, Page::News);
    assert!(approx(start.opacity, 0.0));
    assert!(approx(start.offset_x, -PAGE_SLIDE_DISTANCE));
    assert!(transition.is_animating(2.2));
    assert!(!transition.is_animating(2.5));
}

#[test]
fn retargeting_during_exit_changes_only_the_pending_page() {
    let mut transition = PageTransition::new(Page::News);
    transition.request(Page::Company, 0.0);
    assert!(transition.request(Page::Project, 0.2));
    assert_eq!(transition.target(), Page::Project);
    assert_eq!(transition.frame(0.3).page, Page::News);
    assert_eq!(transition.frame(0.6).page, Page::Project);
}

#[test]
fn returning_to_the_exiting_page_reverses_from_current_progress() {
    let mut transition = PageTransition::new(Page::News);
    transition.request(Page::Company, 0.0);
    let before = transition.frame(0.2);
    assert!(before.offset_x > 0.0);
    assert!(transition.request(Page::News, 0.2));

    let after = transition.frame(0.2);
    assert_eq!(after.page, Page::News);
    assert!(approx(before.opacity, after.opacity));
    assert!(approx(before.offset_x, after.offset_x), "no jump across the axis");

    let halfway = transition.frame(0.45);
    assert!(halfway.offset_x > 0.0 && halfway.offset_x < before.offset_x);
    assert!(halfway.opacity > before.opacity);
    assert!(transition.is_animating(0.6));
    assert_eq!(transition.frame(0.75), PageFrame::settled(Page::News));
}

#[test]
fn leaving_mid_enter_starts_exit_from_current_frame() {
    let mut transition = PageTransition::new(Page::News);
    transition.request(Page::Company, 0.0);
    let entering = transition.frame(0.7);
    assert_eq!(entering.page, Page::Company);
    assert!(entering.offset_x > 0.0);

    assert!(transition.request(Page::News, 0.7));
    let exiting = transition.frame(0.7);
    assert_eq!(exiting.page, Page::Company);
    assert!(approx(entering.opacity, exiting.opacity));
    assert!(approx(entering.offset_x, exiting.offset_x), "no jump across the axis");
    assert_eq!(transition.target(), Page::News);

    let later = transition.frame(0.95);
    assert!(later.opacity < exiting.opacity);
    assert!(later.offset_x < exiting.offset_x, "company exits towards -x");

    let news = transition.frame(1.45);
    assert_eq!(news.page, Page::News);
    assert!(news.offset_x < 0.0, "news enters from -x");
}
