extern crate std;

use crate::{test_utils::TestContext, Error};

#[test]
fn test_admin_can_register_module() {
    let ctx = TestContext::new();
    let peer = ctx.generate_address();

    assert_eq!(ctx.client.get_module(), None);
    assert!(!ctx.client.is_registered_peer(&peer));

    ctx.client.register_module(&ctx.admin, &peer);

    assert_eq!(ctx.client.get_module(), Some(peer.clone()));
    assert!(ctx.client.is_registered_peer(&peer));
}

#[test]
fn test_non_admin_cannot_register_module() {
    let ctx = TestContext::new();
    let rando = ctx.generate_address();
    let peer = ctx.generate_address();

    let result = ctx.client.try_register_module(&rando, &peer);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(ctx.client.get_module(), None);
}

#[test]
fn test_register_module_is_write_once() {
    let ctx = TestContext::new();
    let first = ctx.generate_address();
    let second = ctx.generate_address();

    ctx.client.register_module(&ctx.admin, &first);

    let result = ctx.client.try_register_module(&ctx.admin, &second);
    assert_eq!(result, Err(Ok(Error::ModuleAlreadyRegistered)));

    // The original peer stays in effect.
    assert_eq!(ctx.client.get_module(), Some(first.clone()));
    assert!(ctx.client.is_registered_peer(&first));
    assert!(!ctx.client.is_registered_peer(&second));
}

#[test]
fn test_register_self_fails() {
    let ctx = TestContext::new();

    let result = ctx.client.try_register_module(&ctx.admin, &ctx.client.address);
    assert_eq!(result, Err(Ok(Error::InvalidAddress)));
    assert_eq!(ctx.client.get_module(), None);
}

#[test]
fn test_unrelated_address_is_not_peer() {
    let ctx = TestContext::new();
    let peer = ctx.generate_address();
    let other = ctx.generate_address();

    ctx.client.register_module(&ctx.admin, &peer);
    assert!(!ctx.client.is_registered_peer(&other));
}
