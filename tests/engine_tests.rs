// Integration tests for the visualizer engine: mounting, dispatch, and action binding

use algoviz::config::EngineConfig;
use algoviz::engine::controls::{Action, ControlId};
use algoviz::engine::mount::Canvas;
use algoviz::engine::VisualizerEngine;
use algoviz::widgets::{array, linked_list, queue, sort, stack, WidgetKind, COMING_SOON};
use std::time::{Duration, Instant};

fn cells(engine: &VisualizerEngine) -> Vec<i64> {
    engine
        .canvas()
        .frame()
        .expect("canvas should hold a frame")
        .cells
        .clone()
}

fn highlighted(engine: &VisualizerEngine) -> Vec<usize> {
    engine
        .canvas()
        .frame()
        .expect("canvas should hold a frame")
        .highlighted()
}

#[test]
fn test_fresh_engine_is_blank() {
    let engine = VisualizerEngine::default();
    assert_eq!(engine.kind(), None);
    assert_eq!(engine.canvas(), &Canvas::Blank);
    assert!(engine.controls().is_empty());
    assert!(!engine.is_animating());
}

#[test]
fn test_dispatch_by_concept_id() {
    let mut engine = VisualizerEngine::default();

    let cases = [
        ("arrays", WidgetKind::Array, 5),
        ("strings", WidgetKind::Array, 5),
        ("linked-list", WidgetKind::LinkedList, 5),
        ("stacks", WidgetKind::Stack, 3),
        ("queues", WidgetKind::Queue, 3),
        ("sorting", WidgetKind::Sort, 2),
        ("graphs", WidgetKind::Unsupported, 0),
    ];

    for (concept_id, kind, control_count) in cases {
        engine.render(concept_id);
        assert_eq!(engine.kind(), Some(kind), "concept {}", concept_id);
        assert_eq!(engine.concept_id(), Some(concept_id));
        assert_eq!(engine.controls().len(), control_count, "concept {}", concept_id);
    }
}

#[test]
fn test_unsupported_concept_shows_message() {
    let mut engine = VisualizerEngine::default();
    engine.render("dynamic-programming");

    assert_eq!(engine.canvas(), &Canvas::Message(COMING_SOON));
    assert!(engine.controls().is_empty());
    assert!(!engine.perform(Action::Insert, Instant::now()));
}

#[test]
fn test_initial_buffers() {
    let mut engine = VisualizerEngine::default();

    engine.render("arrays");
    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50]);
    engine.render("linked-list");
    assert_eq!(cells(&engine), vec![10, 20, 30]);
    engine.render("stacks");
    assert_eq!(cells(&engine), vec![10, 20, 30]);
    engine.render("queues");
    assert_eq!(cells(&engine), vec![10, 20, 30]);
    engine.render("sorting");
    assert_eq!(cells(&engine).len(), 15);
}

#[test]
fn test_input_defaults() {
    let mut engine = VisualizerEngine::default();

    engine.render("arrays");
    assert_eq!(engine.controls().numeric(array::VALUE_INPUT), 60);
    assert_eq!(engine.controls().numeric(array::INDEX_INPUT), 2);

    for (concept_id, input) in [
        ("linked-list", linked_list::VALUE_INPUT),
        ("stacks", stack::VALUE_INPUT),
        ("queues", queue::VALUE_INPUT),
    ] {
        engine.render(concept_id);
        assert_eq!(engine.controls().numeric(input), 40, "concept {}", concept_id);
    }
}

#[test]
fn test_rerender_discards_state() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();

    engine.render("arrays");
    assert!(engine.activate(array::DELETE_BUTTON, now));
    assert_eq!(cells(&engine), vec![10, 20, 40, 50]);

    engine.render("stacks");
    engine.render("arrays");
    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50]);

    // Same id again also rebuilds from scratch
    engine.set_input(array::INDEX_INPUT, "0");
    engine.activate(array::DELETE_BUTTON, now);
    engine.render("arrays");
    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50]);
    assert_eq!(engine.controls().numeric(array::INDEX_INPUT), 2);
}

#[test]
fn test_array_scenario_through_controls() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("arrays");

    // Defaults are value 60, index 2
    assert!(engine.activate(array::INSERT_BUTTON, now));
    assert_eq!(cells(&engine), vec![10, 20, 60, 30, 40, 50]);

    assert!(engine.activate(array::DELETE_BUTTON, now));
    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_non_numeric_input_coerces_to_zero() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("arrays");

    assert!(engine.set_input(array::VALUE_INPUT, "abc"));
    assert!(engine.set_input(array::INDEX_INPUT, ""));
    engine.activate(array::INSERT_BUTTON, now);
    assert_eq!(cells(&engine), vec![0, 10, 20, 30, 40, 50]);
}

#[test]
fn test_out_of_range_index_is_noop() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("arrays");

    engine.set_input(array::INDEX_INPUT, "6");
    engine.activate(array::INSERT_BUTTON, now);
    engine.set_input(array::INDEX_INPUT, "5");
    engine.activate(array::DELETE_BUTTON, now);
    engine.set_input(array::INDEX_INPUT, "-1");
    engine.activate(array::DELETE_BUTTON, now);
    engine.activate(array::INSERT_BUTTON, now);
    engine.activate(array::ACCESS_BUTTON, now);

    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50]);
    assert!(highlighted(&engine).is_empty());
}

#[test]
fn test_insert_at_end_is_valid() {
    let mut engine = VisualizerEngine::default();
    engine.render("arrays");

    engine.set_input(array::INDEX_INPUT, "5");
    engine.activate(array::INSERT_BUTTON, Instant::now());
    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50, 60]);
}

#[test]
fn test_access_highlight_expires() {
    let mut engine = VisualizerEngine::new(EngineConfig::default());
    let start = Instant::now();
    engine.render("arrays");

    engine.activate(array::ACCESS_BUTTON, start);
    assert_eq!(highlighted(&engine), vec![2]);
    assert!(engine.is_animating());
    assert_eq!(cells(&engine), vec![10, 20, 30, 40, 50]);

    assert!(!engine.tick(start + Duration::from_millis(999)));
    assert_eq!(highlighted(&engine), vec![2]);

    assert!(engine.tick(start + Duration::from_millis(1000)));
    assert!(highlighted(&engine).is_empty());
    assert!(!engine.is_animating());
}

#[test]
fn test_second_access_replaces_highlight() {
    let mut engine = VisualizerEngine::default();
    let start = Instant::now();
    engine.render("arrays");

    engine.activate(array::ACCESS_BUTTON, start);
    engine.set_input(array::INDEX_INPUT, "4");
    engine.activate(array::ACCESS_BUTTON, start + Duration::from_millis(500));
    assert_eq!(highlighted(&engine), vec![4]);

    // The replacement carries its own deadline
    assert!(!engine.tick(start + Duration::from_millis(1200)));
    assert_eq!(highlighted(&engine), vec![4]);
    assert!(engine.tick(start + Duration::from_millis(1500)));
    assert!(highlighted(&engine).is_empty());
}

#[test]
fn test_mutation_clears_access_highlight() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("arrays");

    engine.activate(array::ACCESS_BUTTON, now);
    engine.activate(array::INSERT_BUTTON, now);
    assert!(highlighted(&engine).is_empty());
}

#[test]
fn test_linked_list_scenario() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("linked-list");

    engine.activate(linked_list::PUSH_FRONT_BUTTON, now);
    assert_eq!(cells(&engine), vec![40, 10, 20, 30]);
    engine.activate(linked_list::POP_BACK_BUTTON, now);
    assert_eq!(cells(&engine), vec![40, 10, 20]);

    engine.set_input(linked_list::VALUE_INPUT, "7");
    engine.activate(linked_list::PUSH_BACK_BUTTON, now);
    engine.activate(linked_list::POP_FRONT_BUTTON, now);
    assert_eq!(cells(&engine), vec![10, 20, 7]);
}

#[test]
fn test_pops_on_empty_structures_are_noops() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();

    for (concept_id, pop) in [
        ("linked-list", linked_list::POP_FRONT_BUTTON),
        ("linked-list", linked_list::POP_BACK_BUTTON),
        ("stacks", stack::POP_BUTTON),
        ("queues", queue::DEQUEUE_BUTTON),
    ] {
        engine.render(concept_id);
        for _ in 0..5 {
            assert!(engine.activate(pop, now));
        }
        assert!(cells(&engine).is_empty(), "concept {}", concept_id);
    }
}

#[test]
fn test_stack_scenario() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("stacks");

    engine.activate(stack::PUSH_BUTTON, now);
    assert_eq!(cells(&engine), vec![10, 20, 30, 40]);
    engine.activate(stack::POP_BUTTON, now);
    assert_eq!(cells(&engine), vec![10, 20, 30]);
}

#[test]
fn test_queue_scenario() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("queues");

    engine.activate(queue::ENQUEUE_BUTTON, now);
    assert_eq!(cells(&engine), vec![10, 20, 30, 40]);
    engine.activate(queue::DEQUEUE_BUTTON, now);
    assert_eq!(cells(&engine), vec![20, 30, 40]);
}

#[test]
fn test_activate_ignores_inputs_and_unknown_ids() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();
    engine.render("stacks");

    assert!(!engine.activate(stack::VALUE_INPUT, now));
    assert!(!engine.activate(ControlId("nope"), now));
    assert!(!engine.activate(array::INSERT_BUTTON, now));
    assert!(!engine.set_input(ControlId("nope"), "3"));
    assert!(!engine.perform(Action::Enqueue, now));
    assert_eq!(cells(&engine), vec![10, 20, 30]);
}

#[test]
fn test_nothing_mounted_ignores_everything() {
    let mut engine = VisualizerEngine::default();
    let now = Instant::now();

    assert!(!engine.perform(Action::Push, now));
    assert!(!engine.tick(now));

    engine.render("stacks");
    engine.unmount();
    assert_eq!(engine.kind(), None);
    assert_eq!(engine.canvas(), &Canvas::Blank);
    assert!(!engine.perform(Action::Push, now));
}

#[test]
fn test_bubble_sort_runs_to_completion() {
    let config = EngineConfig::seeded(7);
    let step = config.step_delay;
    let mut engine = VisualizerEngine::new(config);
    let mut now = Instant::now();
    engine.render("sorting");

    let mut before = cells(&engine);
    assert!(engine.activate(sort::BUBBLE_SORT_BUTTON, now));
    assert!(engine.is_animating());
    assert_eq!(highlighted(&engine), vec![0, 1]);

    let mut ticks = 0;
    while engine.is_animating() {
        now += step;
        engine.tick(now);
        ticks += 1;
        assert!(ticks <= 15 * 15, "sort did not finish");
    }

    let mut after = cells(&engine);
    assert!(after.windows(2).all(|w| w[0] <= w[1]));
    assert!(highlighted(&engine).is_empty());
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_bubble_sort_waits_between_steps() {
    let config = EngineConfig::seeded(11);
    let mut engine = VisualizerEngine::new(config);
    let start = Instant::now();
    engine.render("sorting");

    engine.activate(sort::BUBBLE_SORT_BUTTON, start);
    let first = cells(&engine);
    assert!(!engine.tick(start + Duration::from_millis(199)));
    assert_eq!(cells(&engine), first);
    assert!(engine.tick(start + Duration::from_millis(200)));
}

#[test]
fn test_render_cancels_running_sort() {
    let mut engine = VisualizerEngine::new(EngineConfig::seeded(3));
    let now = Instant::now();
    engine.render("sorting");
    engine.activate(sort::BUBBLE_SORT_BUTTON, now);
    assert!(engine.is_animating());

    engine.render("sorting");
    assert!(!engine.is_animating());
    assert!(highlighted(&engine).is_empty());
    assert!(!engine.tick(now + Duration::from_secs(60)));
}

#[test]
fn test_generate_new_during_sort_cancels_run() {
    let mut engine = VisualizerEngine::new(EngineConfig::seeded(5));
    let now = Instant::now();
    engine.render("sorting");
    engine.activate(sort::BUBBLE_SORT_BUTTON, now);

    assert!(engine.activate(sort::GENERATE_BUTTON, now + Duration::from_millis(100)));
    assert!(!engine.is_animating());
    assert!(highlighted(&engine).is_empty());

    let values = cells(&engine);
    assert_eq!(values.len(), 15);
    assert!(values.iter().all(|v| (10..=99).contains(v)));
}

#[test]
fn test_seeded_datasets_repeat() {
    let mut first = VisualizerEngine::new(EngineConfig::seeded(42));
    let mut second = VisualizerEngine::new(EngineConfig::seeded(42));
    first.render("sorting");
    second.render("sorting");
    assert_eq!(cells(&first), cells(&second));
}
