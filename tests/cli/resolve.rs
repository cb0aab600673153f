use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{BROKEN_CATALOG, CliTest, SMALL_CATALOG};

#[test]
fn test_resolve_demo_korean() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["resolve", "--lang", "ko"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    demo.signin    로그인
    demo.signup    1개월 무료체험
    demo.h01       YouTube의 프리 티어는
    demo.h02       더 이상 사용할 수 없습니다.
    demo.prealert  지난 2021년 1월, YouTube의 무료 에디션 지원이 2021년 12월에 종료될 것이라고 공지했습니다.
    demo.why01     수준 높은 크리에이터들로 이뤄진  안전한 커뮤니티를 만들기 위한 YouTube의 노력의 일환으로, 무료 사용자의 YouTube 지원을 종료하였으며, 2022년 6월부터 Premium에 등록되지 않은 크리에이터의 영상은 제거될 예정입니다.
    demo.why02     기존 데이터는 상단의 '로그인'을 눌러 Vimeo, Facebook Live로 이전할 수 있습니다.
    demo.monthly   매월
    demo.yearly    매년
    demo.save25    25% 절약
    demo.gpay      로 결제
    demo.pay       구매

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_resolve_defaults_to_english() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("resolve"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    demo.signin    Sign In
    demo.signup    1 MONTH TRIAL
    demo.h01       YouTube's free tier is
    demo.h02       No longer available.
    demo.prealert  In January 2021, we announced that YouTube's free tier support would end in December 2021.
    demo.why01     As part of YouTube's efforts to create a safe community of high-quality creators, we are ending support for YouTube for free users, and starting in June 2022, videos from creators not enrolled in Premium will be removed.
    demo.why02     Existing data can be transferred to Vimeo, Facebook Live by pressing 'Sign In' at the top.
    demo.monthly   Monthly
    demo.yearly    Yearly
    demo.save25    SAVE 25%
    demo.gpay      PURCHASE
    demo.pay       Buy

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_resolve_unknown_language_falls_back() -> Result<()> {
    let test = CliTest::with_file("catalog.json", SMALL_CATALOG)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--lang", "fr"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    title        Welcome
    form.email   Email address
    form.submit  Send

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_resolve_from_query() -> Result<()> {
    let test = CliTest::with_file("catalog.json", SMALL_CATALOG)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--query", "?hl=en"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    title        Welcome
    form.email   Email address
    form.submit  Send

    ----- stderr -----
    "
    );

    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--query", "?hl=ko"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    title        환영합니다
    form.email   Email address
    form.submit  보내기

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_resolve_query_uses_default_when_unrecognized() -> Result<()> {
    let test = CliTest::with_file("catalog.json", r#"{"title": {"en": "Welcome", "ko": "환영합니다"}}"#)?;

    for query in ["?hl=fr", "?lang=en", ""] {
        insta::allow_duplicates! {
        assert_cmd_snapshot!(
            test.command()
                .args(["resolve", "--catalog", "catalog.json", "--query", query]),
            @r"
        success: true
        exit_code: 0
        ----- stdout -----
        title  환영합니다

        ----- stderr -----
        "
        );
        }
    }

    Ok(())
}

#[test]
fn test_resolve_json() -> Result<()> {
    let test = CliTest::with_file("catalog.json", SMALL_CATALOG)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--lang", "ko", "--json"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "title": "환영합니다",
      "form.email": "Email address",
      "form.submit": "보내기"
    }

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_resolve_trace() -> Result<()> {
    let test = CliTest::with_file("catalog.json", r#"{"title": {"en": "Welcome"}}"#)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--trace"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    text        title  Welcome
    placeholder title  Welcome
    value       title  Welcome

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_resolve_missing_fallback_is_error() -> Result<()> {
    let test = CliTest::with_file("catalog.json", BROKEN_CATALOG)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--lang", "fr"]),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Key 'broken' has no 'fr' translation and no 'en' fallback.
    "
    );

    // Korean text exists for every key, so no fallback is needed.
    assert_cmd_snapshot!(
        test.command()
            .args(["resolve", "--catalog", "catalog.json", "--lang", "ko"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ok      확인
    broken  고장

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_resolve_config_fallback_language() -> Result<()> {
    let test = CliTest::with_file("catalog.json", BROKEN_CATALOG)?;
    test.write_file(
        ".i18nbindrc.json",
        r#"{ "catalog": "catalog.json", "fallbackLanguage": "ko" }"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["resolve", "--lang", "fr", "--json"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "ok": "확인",
      "broken": "고장"
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_resolve_lang_conflicts_with_query() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .command()
        .args(["resolve", "--lang", "ko", "--query", "?hl=en"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("cannot be used with"));
    Ok(())
}
