//! Normalization of status files on disk.

use super::helpers::{FileBoard, file_board};
use local_organizer::task::{codec, domain::TaskStatus};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_block_is_purged_from_disk(file_board: FileBoard) {
    file_board.write(
        TaskStatus::Backlog,
        "```task\ntitle: Good\n```\n\n```task\ntitle: [unterminated\n```\n",
    );

    let report = file_board
        .service
        .reserialize_all()
        .await
        .expect("reserialize should succeed");

    assert_eq!(report.purged_total(), 1);
    assert_eq!(
        file_board.read(TaskStatus::Backlog),
        "```task\ntitle: Good\nparentTitle: null\nstatus: backlog\ndescription: ''\n```\n"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn text_outside_blocks_and_legacy_ids_are_dropped(file_board: FileBoard) {
    file_board.write(
        TaskStatus::Complete,
        "# Done\n\nSome notes.\n\n```task\nid: 17\nparentId: 3\ntitle: Shipped\nstatus: backlog\n```\ntrailing\n",
    );

    file_board
        .service
        .reserialize_all()
        .await
        .expect("reserialize should succeed");

    let rewritten = file_board.read(TaskStatus::Complete);
    assert!(!rewritten.contains("Some notes"));
    assert!(!rewritten.contains("parentId"));
    assert!(!rewritten.contains("id:"));
    let tasks = codec::parse(&rewritten, TaskStatus::Complete).into_tasks();
    let task = tasks.first().expect("one task");
    assert_eq!(task.title(), "Shipped");
    assert!(rewritten.contains("status: complete"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reserialize_reaches_a_fixed_point(file_board: FileBoard) {
    file_board.write(
        TaskStatus::InProgress,
        "```task\ndescription: |\n  multi\n  line\ntitle: Shape\nestimate: 5\n```\n```task\ntitle: Next\n```\n",
    );

    file_board
        .service
        .reserialize_all()
        .await
        .expect("first reserialize");
    let first = file_board.read(TaskStatus::InProgress);
    file_board
        .service
        .reserialize_all()
        .await
        .expect("second reserialize");

    assert_eq!(file_board.read(TaskStatus::InProgress), first);
    assert_eq!(
        codec::parse(&first, TaskStatus::InProgress).tasks().len(),
        2
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn block_closed_mid_line_survives_reserialize(file_board: FileBoard) {
    file_board.write(
        TaskStatus::Backlog,
        "```task\ntitle: A\ndescription: x```\n\n```task\ntitle: B\n```\n\n```task\ntitle: Open\n",
    );

    let report = file_board
        .service
        .reserialize_all()
        .await
        .expect("reserialize should succeed");

    assert_eq!(report.kept_total(), 2);
    assert_eq!(report.purged_total(), 1);
    let rewritten = file_board.read(TaskStatus::Backlog);
    let titles: Vec<String> = codec::parse(&rewritten, TaskStatus::Backlog)
        .into_tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}
