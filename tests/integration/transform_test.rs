use m3uclean::core::playlist::{category_label, CHANNEL_NUMBER_ATTR};
use m3uclean::{transform, Denylist, PlaylistError};

const SAMPLE: &str = "#EXTM3U\n\
#EXTINF:-1 group-title=\"News\",News1\n\
http://x/news1\n\
#EXTINF:-1 group-title=\"Radio FM\",Radio1\n\
http://x/radio1\n\
#EXTINF:-1 group-title=\"News\",News2\n\
http://x/news2";

/// Values of every injected channel-number attribute, in order
fn channel_numbers(text: &str) -> Vec<usize> {
    let needle = format!("{}=\"", CHANNEL_NUMBER_ATTR);
    text.lines()
        .filter(|l| l.starts_with("#EXTINF"))
        .flat_map(|l| {
            l.match_indices(&needle)
                .map(|(i, _)| {
                    let rest = &l[i + needle.len()..];
                    let end = rest.find('"').unwrap();
                    rest[..end].parse::<usize>().unwrap()
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn test_news_and_radio_scenario() {
    let out = transform(SAMPLE, &Denylist::default()).unwrap();
    assert_eq!(
        out.text,
        "#EXTM3U\n\
         #EXTINF:-1 channel-number=\"1\" group-title=\"News\",News1\n\
         http://x/news1\n\
         #EXTINF:-1 channel-number=\"2\" group-title=\"News\",News2\n\
         http://x/news2"
    );
    assert_eq!(out.channels, 2);
    assert_eq!(out.filtered, 1);
    assert_eq!(out.ignored, 0);
}

#[test]
fn test_no_header_fails() {
    let result = transform("foo\nbar", &Denylist::default());
    assert!(matches!(result, Err(PlaylistError::MissingHeader)));
}

#[test]
fn test_header_check_only_looks_at_first_line() {
    for input in ["", "\n", "http://x/a\n#EXTM3U", "#EXTINF:-1,A\n#EXTM3U"] {
        assert!(
            transform(input, &Denylist::default()).is_err(),
            "expected failure for {:?}",
            input
        );
    }
}

#[test]
fn test_comment_lines_dropped_anywhere() {
    let input = "#EXTM3U\n\
                 # a comment\n\
                 #EXTINF:-1 group-title=\"News\",N\n\
                 #EXTVLCOPT:http-referrer=http://x\n\
                 http://x/n\n\
                 #EXTGRP:Whatever\n\
                 #EXTM3U\n\
                 # trailing comment";
    let out = transform(input, &Denylist::default()).unwrap();
    assert_eq!(
        out.text,
        "#EXTM3U\n#EXTINF:-1 channel-number=\"1\" group-title=\"News\",N\nhttp://x/n"
    );
    assert_eq!(out.ignored, 5);
    // The repeated marker later on is dropped like any other directive
    assert_eq!(out.text.matches("#EXTM3U").count(), 1);
}

#[test]
fn test_blank_lines_dropped() {
    let input = "#EXTM3U\n\n   \n#EXTINF:-1,A\n\n\thttp://x/a  \n\n";
    let out = transform(input, &Denylist::default()).unwrap();
    assert_eq!(out.text, "#EXTM3U\n#EXTINF:-1,A channel-number=\"1\"\nhttp://x/a");
    assert!(!out.text.lines().any(|l| l.trim().is_empty()));
}

#[test]
fn test_numbering_is_contiguous_regardless_of_filtering() {
    let groups = ["News", "Radio", "Sports", "FM 101", "Movies", "电台", "Kids", "AM Talk", "Docs"];
    let mut input = String::from("#EXTM3U\n");
    for (i, group) in groups.iter().enumerate() {
        input.push_str(&format!("#EXTINF:-1 group-title=\"{}\",Ch{}\nhttp://x/{}\n", group, i, i));
    }

    let out = transform(&input, &Denylist::default()).unwrap();
    let numbers = channel_numbers(&out.text);
    assert_eq!(numbers, (1..=out.channels).collect::<Vec<_>>());
    assert_eq!(out.channels, 5);
    assert_eq!(out.filtered, 4);
}

#[test]
fn test_filtered_entries_leave_no_trace() {
    let input = "#EXTM3U\n\
                 #EXTINF:-1 group-title=\"FM Radio Network\",Net\n\
                 http://x/net\n\
                 #EXTINF:-1 group-title=\"中央广播\",Cn\n\
                 http://x/cn\n\
                 #EXTINF:-1 group-title=\"Movies\",Film\n\
                 http://x/film";
    let out = transform(input, &Denylist::default()).unwrap();
    for gone in ["Net", "http://x/net", "Cn", "http://x/cn"] {
        assert!(!out.text.lines().any(|l| l.ends_with(gone)), "{} leaked", gone);
    }
    assert!(out.text.contains("http://x/film"));
}

#[test]
fn test_entries_without_label_are_never_filtered() {
    let input = "#EXTM3U\n#EXTINF:-1 tvg-name=\"Radio One\",Radio One\nhttp://x/r1";
    let out = transform(input, &Denylist::default()).unwrap();
    assert_eq!(out.channels, 1);
    assert!(out.text.contains("http://x/r1"));
}

#[test]
fn test_passthrough_ordering() {
    let input = "#EXTM3U\n\
                 #EXTINF:-1 group-title=\"B\",Second\nhttp://x/2\n\
                 #EXTINF:-1 group-title=\"Radio\",Gone\nhttp://x/gone\n\
                 #EXTINF:-1 group-title=\"A\",First\nhttp://x/1\n\
                 #EXTINF:-1 group-title=\"C\",Third\nhttp://x/3";
    let out = transform(input, &Denylist::default()).unwrap();
    let urls: Vec<&str> = out.text.lines().filter(|l| l.starts_with("http")).collect();
    assert_eq!(urls, vec!["http://x/2", "http://x/1", "http://x/3"]);
}

#[test]
fn test_alternate_denylist() {
    let denylist = Denylist::new(["News"]);
    let out = transform(SAMPLE, &denylist).unwrap();
    assert_eq!(
        out.text,
        "#EXTM3U\n#EXTINF:-1 channel-number=\"1\" group-title=\"Radio FM\",Radio1\nhttp://x/radio1"
    );

    let keep_all = transform(SAMPLE, &Denylist::new(Vec::<String>::new())).unwrap();
    assert_eq!(keep_all.channels, 3);
    assert_eq!(keep_all.filtered, 0);
}

#[test]
fn test_rerun_inserts_a_second_channel_number() {
    // Known limitation: the attribute is inserted blindly, not deduplicated
    let first = transform(SAMPLE, &Denylist::default()).unwrap();
    let second = transform(&first.text, &Denylist::default()).unwrap();

    assert_eq!(second.channels, first.channels);
    assert_eq!(
        second.text.lines().nth(1).unwrap(),
        "#EXTINF:-1 channel-number=\"1\" channel-number=\"1\" group-title=\"News\",News1"
    );
    // Labels survive the rewrite, so filtering is still stable
    assert_eq!(category_label(second.text.lines().nth(1).unwrap()), Some("News"));
    assert_eq!(channel_numbers(&second.text), vec![1, 1, 2, 2]);
}
