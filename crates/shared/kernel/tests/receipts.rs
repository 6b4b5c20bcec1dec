use foh_domain::contact::ContactInput;
use foh_kernel::SAFE_ALPHABET;
use foh_kernel::contact::{ContactSubmitter, SimulatedSubmitter};
use std::collections::HashSet;
use std::time::Duration;

const LOOKALIKES: [char; 5] = ['0', '1', 'I', 'O', 'l'];

#[test]
fn alphabet_has_no_lookalikes_or_repeats() {
    let unique: HashSet<_> = SAFE_ALPHABET.iter().collect();
    assert_eq!(unique.len(), SAFE_ALPHABET.len());
    assert!(LOOKALIKES.iter().all(|ch| !unique.contains(ch)));
}

#[tokio::test(start_paused = true)]
async fn receipt_ids_are_short_readable_and_distinct() {
    let submitter = SimulatedSubmitter::new(Duration::from_millis(10));
    let mut seen = HashSet::new();

    for _ in 0..200 {
        let input = ContactInput::new("Jane", "jane@example.com", "");
        let receipt = submitter.submit(input).await.expect("simulated delivery succeeds");

        assert_eq!(receipt.id.chars().count(), 12);
        assert!(receipt.id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "{}", receipt.id);
        assert!(seen.insert(receipt.id), "receipt id repeated");
    }
}
