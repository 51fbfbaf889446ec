use newsnote_core::db::open_db_in_memory;
use newsnote_core::{
    CommentService, CoreConfig, ModerationFilter, News, NewsService, Principal, ServiceError,
    SqliteCommentRepository, SqliteNewsRepository, SqliteUserRepository, User, UserRepository,
};
use rusqlite::Connection;

fn register(conn: &Connection, username: &str) -> User {
    SqliteUserRepository::new(conn).create_user(username).unwrap()
}

fn seed_news(conn: &Connection) -> News {
    let config = CoreConfig::default();
    let service = NewsService::new(
        SqliteNewsRepository::new(conn),
        SqliteCommentRepository::new(conn),
        &config,
    );
    service.seed_news("title", "news text", None).unwrap()
}

fn comment_service(conn: &Connection) -> CommentService<SqliteCommentRepository<'_>, SqliteNewsRepository<'_>> {
    let config = CoreConfig::default();
    CommentService::new(
        SqliteCommentRepository::new(conn),
        SqliteNewsRepository::new(conn),
        ModerationFilter::new(config.forbidden_terms),
    )
}

fn comment_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM comments;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn anonymous_user_cannot_create_comment() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let service = comment_service(&conn);

    let err = service
        .create_comment(&Principal::Anonymous, news.id, "hello")
        .unwrap_err();

    assert!(matches!(err, ServiceError::Unauthenticated));
    assert_eq!(comment_count(&conn), 0);
}

#[test]
fn authenticated_user_can_create_comment() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let user = register(&conn, "commenter");
    let service = comment_service(&conn);

    let comment = service
        .create_comment(&Principal::User(user.id), news.id, "new comment text")
        .unwrap();

    assert_eq!(comment.text, "new comment text");
    assert_eq!(comment.news, news.id);
    assert_eq!(comment.author, user.id);
    assert!(comment.created > 0);
    assert_eq!(comment_count(&conn), 1);
}

#[test]
fn comment_against_missing_news_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let user = register(&conn, "commenter");
    let service = comment_service(&conn);

    let err = service
        .create_comment(&Principal::User(user.id), 4242, "hello")
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound));
    assert_eq!(comment_count(&conn), 0);
}

#[test]
fn every_forbidden_term_rejects_the_comment() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let user = register(&conn, "commenter");
    let service = comment_service(&conn);

    for term in CoreConfig::default().forbidden_terms {
        let err = service
            .create_comment(
                &Principal::User(user.id),
                news.id,
                &format!("text with {term}"),
            )
            .unwrap_err();
        assert!(matches!(err, ServiceError::ModerationRejected));
        // The warning is one fixed message, whatever the term was.
        assert_eq!(err.to_string(), "comment text contains forbidden words");
    }
    assert_eq!(comment_count(&conn), 0);
}

#[test]
fn author_can_edit_own_comment() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let author = register(&conn, "author");
    let principal = Principal::User(author.id);
    let service = comment_service(&conn);

    let comment = service
        .create_comment(&principal, news.id, "comment text")
        .unwrap();
    let updated = service
        .update_comment(&principal, comment.id, "new comment text")
        .unwrap();

    assert_eq!(updated.text, "new comment text");
    assert_eq!(updated.id, comment.id);
    assert_eq!(updated.created, comment.created);
}

#[test]
fn edited_comment_text_is_moderated_too() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let author = register(&conn, "author");
    let principal = Principal::User(author.id);
    let service = comment_service(&conn);

    let comment = service
        .create_comment(&principal, news.id, "fine at first")
        .unwrap();
    let err = service
        .update_comment(&principal, comment.id, "now with редиска")
        .unwrap_err();

    assert!(matches!(err, ServiceError::ModerationRejected));
    let thread = service.list_comments(news.id).unwrap();
    assert_eq!(thread[0].text, "fine at first");
}

#[test]
fn author_can_delete_own_comment() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let author = register(&conn, "author");
    let principal = Principal::User(author.id);
    let service = comment_service(&conn);

    let comment = service
        .create_comment(&principal, news.id, "comment text")
        .unwrap();
    service.delete_comment(&principal, comment.id).unwrap();

    assert_eq!(comment_count(&conn), 0);
}

#[test]
fn non_author_edit_and_delete_surface_as_not_found() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let author = register(&conn, "author");
    let stranger = register(&conn, "stranger");
    let service = comment_service(&conn);

    let comment = service
        .create_comment(&Principal::User(author.id), news.id, "comment text")
        .unwrap();

    let edit_err = service
        .update_comment(&Principal::User(stranger.id), comment.id, "hijack")
        .unwrap_err();
    assert!(matches!(edit_err, ServiceError::NotFound));

    let delete_err = service
        .delete_comment(&Principal::User(stranger.id), comment.id)
        .unwrap_err();
    assert!(matches!(delete_err, ServiceError::NotFound));

    // Identical to the outcome for an id that never existed.
    let missing_err = service
        .delete_comment(&Principal::User(stranger.id), 4242)
        .unwrap_err();
    assert!(matches!(missing_err, ServiceError::NotFound));

    assert_eq!(comment_count(&conn), 1);
    let thread = service.list_comments(news.id).unwrap();
    assert_eq!(thread[0].text, "comment text");
}

#[test]
fn thread_lists_comments_in_created_order_regardless_of_insertion() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let user = register(&conn, "commenter");
    let service = comment_service(&conn);

    let mut ids = Vec::new();
    for index in 0..7 {
        let comment = service
            .create_comment(&Principal::User(user.id), news.id, &format!("text{index}"))
            .unwrap();
        ids.push(comment.id);
    }

    // Scramble the stored timestamps so insertion order and chronological
    // order disagree.
    let scrambled = [3000_i64, 1000, 7000, 2000, 6000, 4000, 5000];
    for (id, created) in ids.iter().zip(scrambled) {
        conn.execute(
            "UPDATE comments SET created = ?2 WHERE id = ?1;",
            rusqlite::params![id, created],
        )
        .unwrap();
    }

    let thread = service.list_comments(news.id).unwrap();
    let created: Vec<i64> = thread.iter().map(|comment| comment.created).collect();
    assert_eq!(created, vec![1000, 2000, 3000, 4000, 5000, 6000, 7000]);
}

#[test]
fn equal_timestamps_tie_break_by_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let news = seed_news(&conn);
    let user = register(&conn, "commenter");
    let service = comment_service(&conn);

    let first = service
        .create_comment(&Principal::User(user.id), news.id, "first")
        .unwrap();
    let second = service
        .create_comment(&Principal::User(user.id), news.id, "second")
        .unwrap();

    conn.execute("UPDATE comments SET created = 5000;", []).unwrap();

    let thread = service.list_comments(news.id).unwrap();
    assert_eq!(thread[0].id, first.id);
    assert_eq!(thread[1].id, second.id);
}
