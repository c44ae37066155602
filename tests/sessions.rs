#![allow(non_snake_case)]
use one_armed_bandit::{
    Column,
    Frame,
    Fruit,
    MachineConfig,
    MachineState,
    Outcome,
    RandomIcons,
    SlotMachine,
    Tier,
    driver,
    presenter::LogPresenter,
    test_helpers::*,
};
use proptest::prelude::*;
use tokio::runtime::Builder;

fn recording_machine(
    fruit_count: u8,
    total_repetitions: u32,
    icons: ScriptedIcons,
) -> SlotMachine<ScriptedIcons, RecordingPresenter> {
    let config = MachineConfig::new(fruit_count, total_repetitions, 250).unwrap();
    SlotMachine::new(config, icons, RecordingPresenter::default()).unwrap()
}

#[test]
fn spin__with_three_fruits_and_fifteen_repetitions_freezes_columns_in_order() {
    // given
    let mut machine = recording_machine(
        3,
        15,
        ScriptedIcons::new(vec![
            Fruit::Apple,
            Fruit::Lemon,
            Fruit::Orange,
            Fruit::Orange,
            Fruit::Apple,
            Fruit::Lemon,
        ]),
    );
    machine.presenter_mut().clear();
    machine.trigger_spin();

    // when
    let mut last_update = [None; 3];
    let mut frame_index = 0;
    let outcome = loop {
        let before = machine.presenter().calls().len();
        let frame = machine.advance_frame();
        for call in &machine.presenter().calls()[before..] {
            if let PresenterCall::Icon {
                column,
                tier: Tier::Middle,
                ..
            } = call
            {
                last_update[column.index()] = Some(frame_index);
            }
        }
        match frame {
            Frame::Continue => frame_index += 1,
            Frame::Finished(outcome) => break outcome,
            Frame::Idle => panic!("machine went idle mid-session"),
        }
    };

    // then
    assert_eq!(frame_index, 45);
    assert_eq!(last_update, [Some(4), Some(9), Some(45)]);
    let middle = machine.reels().middle_row();
    let expected = if middle[0] == middle[1] && middle[1] == middle[2] {
        Outcome::Win
    } else {
        Outcome::Lose
    };
    assert_eq!(outcome, expected);
    assert_eq!(machine.stats().total_spins(), 1);
    assert_eq!(
        machine.stats().total_wins(),
        u64::from(expected == Outcome::Win)
    );
    assert_eq!(machine.presenter().last_result(), Some(expected));
}

#[test]
fn spin__presenter_shows_final_middle_row() {
    // given
    let mut machine = recording_machine(
        6,
        15,
        ScriptedIcons::per_column([Fruit::Bananas, Fruit::Strawberry, Fruit::Watermelon]),
    );

    // when
    machine.spin_to_completion();

    // then
    let presenter = machine.presenter();
    assert_eq!(presenter.icon(Column::Left, Tier::Middle), Some(Fruit::Bananas));
    assert_eq!(presenter.icon(Column::Center, Tier::Middle), Some(Fruit::Strawberry));
    assert_eq!(presenter.icon(Column::Right, Tier::Middle), Some(Fruit::Watermelon));
    assert_eq!(presenter.last_result(), Some(Outcome::Lose));
}

#[test]
fn spin__single_fruit_always_wins() {
    // given
    let config = MachineConfig::new(1, 15, 250).unwrap();
    let mut machine =
        SlotMachine::new(config, RandomIcons::seeded(7), LogPresenter::default()).unwrap();

    // when
    for _ in 0..5 {
        machine.spin_to_completion();
    }

    // then
    assert_eq!(machine.stats().total_wins(), 5);
    assert_eq!(machine.stats().win_ratio_percent(), 100);
    assert_eq!(machine.presenter().last_outcome(), Some(Outcome::Win));
}

#[test]
fn spin__extra_triggers_during_a_session_are_not_queued() {
    // given
    let mut machine = recording_machine(3, 15, ScriptedIcons::constant(Fruit::Apple));
    machine.trigger_spin();

    // when
    for _ in 0..10 {
        assert!(!machine.trigger_spin());
        machine.advance_frame();
    }
    while machine.advance_frame() == Frame::Continue {}

    // then
    assert_eq!(machine.state(), MachineState::Idle);
    assert_eq!(machine.stats().total_spins(), 1);
    assert_eq!(machine.advance_frame(), Frame::Idle);
}

#[test]
fn seeded_machines__play_identical_games() {
    // given
    let config = MachineConfig::new(3, 15, 250).unwrap();
    let mut first =
        SlotMachine::new(config.clone(), RandomIcons::seeded(42), LogPresenter::default())
            .unwrap();
    let mut second =
        SlotMachine::new(config, RandomIcons::seeded(42), LogPresenter::default()).unwrap();

    // when
    let first_outcomes: Vec<_> = (0..20).map(|_| first.spin_to_completion()).collect();
    let second_outcomes: Vec<_> = (0..20).map(|_| second.spin_to_completion()).collect();

    // then
    assert_eq!(first_outcomes, second_outcomes);
    assert_eq!(first.stats(), second.stats());
}

#[tokio::test(start_paused = true)]
async fn run_sessions__ten_spins_with_three_wins_report_thirty_percent() {
    // given
    let mut machine = recording_machine(3, 15, ScriptedIcons::constant(Fruit::Lemon));

    // when
    for session in 0..10 {
        *machine.icons_mut() = if session % 3 == 0 && session > 0 {
            ScriptedIcons::constant(Fruit::Lemon)
        } else {
            ScriptedIcons::per_column([Fruit::Lemon, Fruit::Orange, Fruit::Lemon])
        };
        driver::run_sessions(&mut machine, 1).await;
    }

    // then
    let stats = machine.stats();
    assert_eq!(stats.total_spins(), 10);
    assert_eq!(stats.total_wins(), 3);
    assert_eq!(stats.losses(), 7);
    assert_eq!(stats.win_ratio_percent(), 30);
    assert_eq!(
        machine.presenter().results(),
        vec![
            Outcome::Lose,
            Outcome::Lose,
            Outcome::Lose,
            Outcome::Win,
            Outcome::Lose,
            Outcome::Lose,
            Outcome::Win,
            Outcome::Lose,
            Outcome::Lose,
            Outcome::Win,
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]
    #[test]
    fn run_sessions__each_session_adds_one_spin_and_at_most_one_win(
        seed in any::<u64>(),
        fruit_count in 1u8..=6,
        sessions in 1u32..6,
    ) {
        let rt = Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        rt.block_on(async {
            _each_session_adds_one_spin_and_at_most_one_win(seed, fruit_count, sessions).await
        })?;
    }
}

async fn _each_session_adds_one_spin_and_at_most_one_win(
    seed: u64,
    fruit_count: u8,
    sessions: u32,
) -> Result<(), TestCaseError> {
    let config = MachineConfig::new(fruit_count, 5, 1).unwrap();
    let mut machine =
        SlotMachine::new(config, RandomIcons::seeded(seed), LogPresenter::default()).unwrap();

    for _ in 0..sessions {
        let before = *machine.stats();
        let outcomes = driver::run_sessions(&mut machine, 1).await;
        let after = *machine.stats();

        prop_assert_eq!(outcomes.len(), 1);
        prop_assert_eq!(after.total_spins(), before.total_spins() + 1);
        let won = u64::from(outcomes[0] == Outcome::Win);
        prop_assert_eq!(after.total_wins(), before.total_wins() + won);
        for fruit in machine.reels().middle_row() {
            prop_assert!(fruit.index() < usize::from(fruit_count));
        }
    }
    Ok(())
}
