use budgetwise::model::forum::{NewComment, NewPost};
use serde_json::json;

use super::*;

/// Tests listing forum posts.
///
/// Expected: Ok with likes, timestamps and author names decoded
#[tokio::test]
async fn lists_posts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/forum/posts",
            200,
            json!([
                factory::forum_post(1, "Saving on groceries", 3, "bob"),
                factory::forum_post(2, "Index funds?", 0, "carol"),
            ]),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().list_posts().await;

    assert!(result.is_ok());
    let posts = result.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].likes_count, 3);
    assert_eq!(posts[0].author(), "bob");
    assert!(posts[0].created_at.is_some());

    test.assert_mocks();

    Ok(())
}

/// Tests creating a post.
///
/// Expected: Ok with the created post
#[tokio::test]
async fn creates_post() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let create = test.api().create_body_matching_endpoint(
        "POST",
        "/api/forum/posts",
        json!({ "title": "Budget tips", "content": "Content of Budget tips" }),
        200,
        &factory::forum_post(5, "Budget tips", 0, TEST_USERNAME),
    )?;

    let result = test
        .authorized_api()
        .create_post(&NewPost {
            title: "Budget tips".to_string(),
            content: "Content of Budget tips".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let post = result.unwrap();
    assert_eq!(post.id, 5);
    assert_eq!(post.author(), TEST_USERNAME);

    create.assert();

    Ok(())
}

/// Tests liking a post.
///
/// Expected: Ok(()) after one POST to the post's like endpoint
#[tokio::test]
async fn likes_post() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint("POST", "/api/forum/posts/1/like", 200, json!({}), 1)
        .build()
        .await?;

    let result = test.authorized_api().like_post(1).await;

    assert_eq!(result, Ok(()));

    test.assert_mocks();

    Ok(())
}

/// Tests reading then extending a post's comments.
///
/// Expected: Ok with the existing comment listed and the new one returned by the backend
#[tokio::test]
async fn lists_and_adds_comments() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/forum/posts/1/comments",
            200,
            json!([factory::forum_comment(10, "Great idea", "bob")]),
            1,
        )
        .build()
        .await?;
    let add = test.api().create_body_matching_endpoint(
        "POST",
        "/api/forum/posts/1/comments",
        json!({ "content": "Thanks!" }),
        200,
        &factory::forum_comment(11, "Thanks!", TEST_USERNAME),
    )?;

    let api = test.authorized_api();
    let comments = api.list_comments(1).await.unwrap();
    let added = api
        .add_comment(
            1,
            &NewComment {
                content: "Thanks!".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author(), "bob");
    assert_eq!(added.id, 11);
    assert_eq!(added.content, "Thanks!");

    add.assert();
    test.assert_mocks();

    Ok(())
}

/// Tests a failed like.
///
/// Expected: Err(MutationFailed) for the like action
#[tokio::test]
async fn failed_like_is_mutation_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "POST",
            "/api/forum/posts/9/like",
            404,
            json!({ "message": "Post not found" }),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().like_post(9).await;

    assert!(matches!(
        result,
        Err(Error::MutationFailed {
            action: "like post",
            ..
        })
    ));

    test.assert_mocks();

    Ok(())
}
