//! BDD step definitions for the webhook notification feature

use cucumber::then;

use crate::world::NotifierWorld;

fn posted_contents(world: &NotifierWorld) -> Vec<String> {
    let http = world.http.as_ref().expect("no run happened");
    http.posts()
        .iter()
        .map(|(_, body)| {
            let value: serde_json::Value = serde_json::from_str(body).expect("body is not JSON");
            value["content"]
                .as_str()
                .expect("content field missing")
                .to_string()
        })
        .collect()
}

#[then(expr = "the webhook should receive {int} post(s)")]
fn webhook_posts(world: &mut NotifierWorld, count: usize) {
    let http = world.http.as_ref().expect("no run happened");
    assert_eq!(http.posts().len(), count);
}

#[then("every post should be a JSON object with only a content field")]
fn posts_have_content_only(world: &mut NotifierWorld) {
    let http = world.http.as_ref().expect("no run happened");
    for (_, body) in http.posts() {
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let object = value.as_object().expect("payload is not an object");
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("content"));
    }
}

#[then(expr = "the notification should start with the mention token {string}")]
fn notification_starts_with_mention(world: &mut NotifierWorld, token: String) {
    let contents = posted_contents(world);
    let content = contents.last().expect("no notification posted");
    assert_eq!(content.lines().next(), Some(token.as_str()));
}

#[then(expr = "line {int} of the notification should be {string}")]
fn notification_line(world: &mut NotifierWorld, line: usize, expected: String) {
    let contents = posted_contents(world);
    let content = contents.last().expect("no notification posted");
    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(lines.get(line - 1).copied(), Some(expected.as_str()), "{content:?}");
}

#[then(expr = "the notification should have {int} lines")]
fn notification_line_count(world: &mut NotifierWorld, count: usize) {
    let contents = posted_contents(world);
    let content = contents.last().expect("no notification posted");
    assert_eq!(content.split('\n').count(), count, "{content:?}");
}

#[then("both notifications should be identical")]
fn notifications_identical(world: &mut NotifierWorld) {
    let contents = posted_contents(world);
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0], contents[1]);
    assert_eq!(world.reports.len(), 2);
    assert_eq!(world.reports[0], world.reports[1]);
}
