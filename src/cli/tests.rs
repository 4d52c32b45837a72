use super::*;
use clap::Parser;

fn publish(extra: &[&str]) -> PublishArgs {
    let mut argv = vec!["pubsub-publish", "--project=my-project", "--topic=my-topic"];
    argv.extend_from_slice(extra);
    PublishArgs::try_parse_from(argv).expect("valid arguments")
}

#[test]
fn publish_defaults() {
    let args = publish(&[]);
    assert_eq!(args.project, "my-project");
    assert_eq!(args.topic, "my-topic");
    assert_eq!(args.incremental_end, -1);
    assert_eq!(args.interval, 1.0);
    assert_eq!(args.mode(), GenerationMode::Timestamped);

    let options = args.options();
    assert_eq!(options.interval, Duration::from_secs(1));
    assert_eq!(options.stop_after, None);
}

#[test]
fn project_and_topic_are_required() {
    assert!(PublishArgs::try_parse_from(["pubsub-publish", "--topic=t"]).is_err());
    assert!(PublishArgs::try_parse_from(["pubsub-publish", "--project=p"]).is_err());
}

#[test]
fn incremental_end_bounds_the_run() {
    let args = publish(&["--incremental-number", "--incremental-end=5", "--interval=0"]);
    assert_eq!(args.mode(), GenerationMode::IncrementalNumber);

    let options = args.options();
    assert_eq!(options.stop_after, NonZeroU64::new(5));
    assert_eq!(options.interval, Duration::ZERO);
}

#[test]
fn non_positive_incremental_end_is_unbounded() {
    assert_eq!(publish(&["--incremental-end", "-1"]).options().stop_after, None);
    assert_eq!(publish(&["--incremental-end=0"]).options().stop_after, None);
    assert_eq!(publish(&["--incremental-end=-7"]).options().stop_after, None);
}

#[test]
fn fractional_interval() {
    let args = publish(&["--interval=0.1"]);
    assert_eq!(args.options().interval, Duration::from_millis(100));
}

#[test]
fn bad_intervals_are_rejected() {
    for bad in ["--interval=-1", "--interval=abc", "--interval=NaN", "--interval=inf"] {
        let argv = ["pubsub-publish", "--project=p", "--topic=t", bad];
        assert!(PublishArgs::try_parse_from(argv).is_err(), "{bad}");
    }
}

#[test]
fn first_mode_flag_wins() {
    let args = publish(&["--random-number", "--random-text"]);
    assert_eq!(args.mode(), GenerationMode::RandomText);

    let args = publish(&["--incremental-number", "--random-credit-card"]);
    assert_eq!(args.mode(), GenerationMode::RandomCreditCard);
}

#[test]
fn subscribe_args() {
    let args = SubscribeArgs::try_parse_from([
        "pubsub-subscribe",
        "--project=my-project",
        "--subscription=my-sub",
    ])
    .expect("valid arguments");
    assert_eq!(args.project, "my-project");
    assert_eq!(args.subscription, "my-sub");
    assert!(args.config.is_none());

    assert!(SubscribeArgs::try_parse_from(["pubsub-subscribe", "--project=p"]).is_err());
}
