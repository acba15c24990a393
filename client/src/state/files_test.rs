use super::*;

fn image(name: &str) -> SelectedFile {
    SelectedFile::from_meta(name, "image/png", 1024.0)
}

#[test]
fn queue_default_is_empty() {
    let queue = FileQueue::default();
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 0);
}

#[test]
fn try_add_accepts_images_in_order() {
    let mut queue = FileQueue::default();
    assert_eq!(queue.try_add(image("a.png")), AddOutcome::Added);
    assert_eq!(queue.try_add(image("b.png")), AddOutcome::Added);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.entries[0].name, "a.png");
    assert_eq!(queue.entries[1].name, "b.png");
}

#[test]
fn try_add_rejects_non_image_mime() {
    let mut queue = FileQueue::default();
    let pdf = SelectedFile::from_meta("report.pdf", "application/pdf", 2048.0);
    assert_eq!(queue.try_add(pdf), AddOutcome::NotAnImage);
    assert!(queue.is_empty());

    let empty_mime = SelectedFile::from_meta("mystery", "", 10.0);
    assert_eq!(queue.try_add(empty_mime), AddOutcome::NotAnImage);
    assert!(queue.is_empty());
}

#[test]
fn try_add_enforces_capacity_bound() {
    let mut queue = FileQueue::default();
    for i in 0..MAX_FILES {
        assert_eq!(queue.try_add(image(&format!("{i}.png"))), AddOutcome::Added);
    }
    assert!(queue.is_full());
    assert_eq!(queue.try_add(image("overflow.png")), AddOutcome::QueueFull);
    assert_eq!(queue.len(), MAX_FILES);
}

#[test]
fn queue_never_exceeds_capacity_under_mixed_adds() {
    let mut queue = FileQueue::default();
    for i in 0..20 {
        let file = if i % 3 == 0 {
            SelectedFile::from_meta(format!("{i}.txt"), "text/plain", 1.0)
        } else {
            image(&format!("{i}.jpg"))
        };
        queue.try_add(file);
        assert!(queue.len() <= MAX_FILES);
        assert!(queue.entries.iter().all(SelectedFile::is_image));
    }
    assert_eq!(queue.len(), MAX_FILES);
}

#[test]
fn remove_shifts_later_entries_down() {
    let mut queue = FileQueue::default();
    for name in ["a.png", "b.png", "c.png"] {
        queue.try_add(image(name));
    }

    let removed = queue.remove(1).expect("index 1 exists");
    assert_eq!(removed.name, "b.png");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.entries[0].name, "a.png");
    assert_eq!(queue.entries[1].name, "c.png");
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    let mut queue = FileQueue::default();
    queue.try_add(image("a.png"));
    assert!(queue.remove(5).is_none());
    assert_eq!(queue.len(), 1);
}

#[test]
fn removing_frees_a_slot_at_capacity() {
    let mut queue = FileQueue::default();
    for i in 0..MAX_FILES {
        queue.try_add(image(&format!("{i}.png")));
    }
    queue.remove(0);
    assert_eq!(queue.try_add(image("late.png")), AddOutcome::Added);
    assert_eq!(queue.entries.last().expect("entry").name, "late.png");
}

#[test]
fn is_image_checks_the_mime_prefix() {
    assert!(image("x.png").is_image());
    assert!(SelectedFile::from_meta("x.webp", "image/webp", 1.0).is_image());
    assert!(!SelectedFile::from_meta("x.svg.gz", "application/gzip", 1.0).is_image());
}
