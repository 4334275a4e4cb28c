// Tests for the flat serialization contract of each response model
// Run with: cargo test --test serialize_test

use serde_json::json;
use social_db::entities::media::MediaType;
use social_db::entities::{comment, follower, media, post, user};
use social_db::models::{
    CommentResponse, FollowerResponse, MediaResponse, PostResponse, UserResponse,
};

#[test]
fn user_serializes_to_exactly_five_fields() {
    let user = user::Model {
        id: 1,
        username: "alice".to_string(),
        firstname: "Alice".to_string(),
        lastname: "Liddell".to_string(),
        email: "alice@example.com".to_string(),
    };

    let value = serde_json::to_value(UserResponse::from(user)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "username": "alice",
            "firstname": "Alice",
            "lastname": "Liddell",
            "email": "alice@example.com"
        })
    );
}

#[test]
fn follower_serializes_both_edge_ids() {
    let edge = follower::Model {
        user_from_id: 2,
        user_to_id: 1,
    };

    let value = serde_json::to_value(FollowerResponse::from(edge)).unwrap();
    assert_eq!(value, json!({"user_from_id": 2, "user_to_id": 1}));
}

#[test]
fn post_serializes_id_and_owner() {
    let post = post::Model { id: 10, user_id: 1 };

    let value = serde_json::to_value(PostResponse::from(post)).unwrap();
    assert_eq!(value, json!({"id": 10, "user_id": 1}));
}

#[test]
fn comment_serializes_text_author_and_post() {
    let comment = comment::Model {
        id: 100,
        comment_text: "hi".to_string(),
        author_id: 1,
        post_id: 10,
    };

    let value = serde_json::to_value(CommentResponse::from(comment)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 100,
            "comment_text": "hi",
            "author_id": 1,
            "post_id": 10
        })
    );
}

#[test]
fn media_type_serializes_as_text_value() {
    let media = media::Model {
        id: 200,
        media_type: MediaType::Image,
        url: "http://x/y.png".to_string(),
        post_id: 10,
    };

    let value = serde_json::to_value(MediaResponse::from(media)).unwrap();
    // the "type" key carries the text value, never the symbolic tag
    assert_eq!(value["type"], json!("image"));
    assert_eq!(
        value,
        json!({
            "id": 200,
            "type": "image",
            "url": "http://x/y.png",
            "post_id": 10
        })
    );
}

#[test]
fn all_media_type_tags_map_to_their_text_values() {
    let tags = [
        (MediaType::Image, "image"),
        (MediaType::Video, "video"),
        (MediaType::Audio, "audio"),
        (MediaType::Document, "document"),
    ];

    for (tag, expected) in tags {
        assert_eq!(serde_json::to_value(tag).unwrap(), json!(expected));
    }
}
