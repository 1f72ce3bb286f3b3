extern crate std;

use crate::{test_utils::TestContext, Error, ProjectStatus};

#[test]
fn test_withdraw_after_goal_met() {
    let ctx = TestContext::new();
    let id = ctx.create_project(1_000, false);
    let contributor = ctx.generate_address();

    ctx.fund(id, &contributor, 1_000);
    ctx.client.finalize_or_withdraw(&id, &ctx.admin);

    assert_eq!(ctx.token.balance(&ctx.admin), 1_000);
    assert_eq!(ctx.token.balance(&ctx.client.address), 0);

    let detail = ctx.client.get_project_detail(&id);
    assert_eq!(detail.status, ProjectStatus::Closed);
    // The raised total is kept as a historical record.
    assert_eq!(detail.amount_raised, 1_000);
}

#[test]
fn test_withdraw_below_goal_fails_for_fixed_funding() {
    let ctx = TestContext::new();
    let id = ctx.create_project(1_000, false);
    let contributor = ctx.generate_address();

    ctx.fund(id, &contributor, 400);

    let result = ctx.client.try_finalize_or_withdraw(&id, &ctx.admin);
    assert_eq!(result, Err(Ok(Error::GoalNotMet)));
    assert_eq!(ctx.client.get_project_detail(&id).status, ProjectStatus::Funding);
    assert_eq!(ctx.token.balance(&ctx.client.address), 400);
}

#[test]
fn test_withdraw_below_goal_succeeds_for_flexible_funding() {
    let ctx = TestContext::new();
    let id = ctx.create_project(1_000, true);
    let contributor = ctx.generate_address();

    ctx.fund(id, &contributor, 400);
    ctx.client.finalize_or_withdraw(&id, &ctx.admin);

    assert_eq!(ctx.token.balance(&ctx.admin), 400);
    assert_eq!(ctx.client.get_project_detail(&id).status, ProjectStatus::Closed);
}

#[test]
fn test_withdraw_by_non_creator_fails() {
    let ctx = TestContext::new();
    let id = ctx.create_project(1_000, false);
    let contributor = ctx.generate_address();
    let attacker = ctx.generate_address();

    ctx.fund(id, &contributor, 1_000);

    let result = ctx.client.try_finalize_or_withdraw(&id, &attacker);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(ctx.token.balance(&ctx.client.address), 1_000);
}

#[test]
fn test_withdraw_twice_fails() {
    let ctx = TestContext::new();
    let id = ctx.create_project(1_000, false);
    let contributor = ctx.generate_address();

    ctx.fund(id, &contributor, 1_000);
    ctx.client.finalize_or_withdraw(&id, &ctx.admin);

    let result = ctx.client.try_finalize_or_withdraw(&id, &ctx.admin);
    assert_eq!(result, Err(Ok(Error::ProjectClosed)));
}

#[test]
fn test_withdraw_with_no_contributions_flexible() {
    let ctx = TestContext::new();
    let id = ctx.create_project(1_000, true);

    ctx.client.finalize_or_withdraw(&id, &ctx.admin);

    assert_eq!(ctx.token.balance(&ctx.admin), 0);
    assert_eq!(ctx.client.get_project_detail(&id).status, ProjectStatus::Closed);
}

#[test]
fn test_withdraw_unknown_project_fails() {
    let ctx = TestContext::new();
    let result = ctx.client.try_finalize_or_withdraw(&42, &ctx.admin);
    assert_eq!(result, Err(Ok(Error::NotFound)));
}
