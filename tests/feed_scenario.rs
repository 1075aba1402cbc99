use peerpals::{AppState, Credentials, FeedConfig, PostError, Session};

fn empty_state() -> AppState {
    AppState::new(&FeedConfig {
        seed_demo_posts: false,
        ..FeedConfig::default()
    })
}

#[test]
fn sign_in_post_like_sign_out() {
    let mut state = empty_state();
    assert_eq!(state.session.session(), &Session::Unauthenticated);
    assert!(state.posts.is_empty());

    let user = state.session.authenticate(Credentials::new("Sarah", ""));
    assert!(matches!(state.session.session(), Session::Authenticated(u) if u.name == "Sarah"));

    let post = state
        .posts
        .create_post(&user.name, "Hello world")
        .unwrap()
        .clone();
    let all = state.posts.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].content(), "Hello world");
    assert_eq!(all[0].author(), "Sarah");
    assert_eq!(all[0].base_likes(), 0);

    assert!(state.likes.toggle_like(post.id()));
    assert_eq!(state.likes.effective_like_count(&post), 1);

    state.session.sign_out();
    assert_eq!(state.session.session(), &Session::Unauthenticated);
    assert_eq!(state.posts.list_all(), &[post]);
}

#[test]
fn rejected_posts_are_never_committed() {
    let mut state = empty_state();
    let user = state.session.authenticate(Credentials::new("Omar", "omar@example.com"));

    assert_eq!(state.posts.create_post(&user.name, "\n\t "), Err(PostError::Empty));
    assert_eq!(
        state.posts.create_post(&user.name, &"z".repeat(501)),
        Err(PostError::TooLong { len: 501, max: 500 })
    );
    assert!(state.posts.is_empty());
}

#[test]
fn profile_lists_only_the_signed_in_users_posts() {
    let mut state = AppState::new(&FeedConfig::default());
    let user = state.session.authenticate(Credentials::new("Sarah Chen", ""));
    state.posts.create_post(&user.name, "mine").unwrap();
    state.posts.create_post("Someone Else", "theirs").unwrap();

    let mine: Vec<_> = state
        .posts
        .list_by_author(&user.name)
        .iter()
        .map(|p| p.content().to_string())
        .collect();

    // the seeded "Sarah Chen" post shares the name, so it is attributed too
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0], "mine");
    assert_eq!(state.posts.list_all().len(), 4);
}
