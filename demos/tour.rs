//! A walk through the container's contract: create, alias, copy, grow,
//! compare, destroy. Run with `cargo run --example tour`.

use anyhow::Result;
use zstring::{destroy_string, ZString};

fn creating_a_string() -> Result<()> {
    let s = ZString::from_bytes(b"Hello, World!")?;

    println!(
        "String: {}, Length: {}",
        String::from_utf8_lossy(s.as_bytes()),
        s.len()
    );
    assert_eq!(s.len(), 13);
    assert_eq!(s.as_bytes_with_nul().last(), Some(&0));
    Ok(())
}

fn copying_through_a_view() -> Result<()> {
    let s = ZString::from_bytes(b"Hello, World!")?;
    let view = s.view();

    let copy = ZString::from_view(&view)?;
    println!(
        "String from view: {}, Length: {}",
        String::from_utf8_lossy(copy.as_bytes()),
        copy.len()
    );
    assert_eq!(copy, s);
    Ok(())
}

fn starting_empty() -> Result<()> {
    let s = ZString::with_capacity(0)?;

    println!("Empty string length: {}", s.len());
    assert!(s.is_empty());
    assert_eq!(s.as_bytes_with_nul(), b"\0");
    Ok(())
}

fn copying_through_a_slice() -> Result<()> {
    let s = ZString::from_bytes(b"Hello, World!")?;
    let slice = s.slice(0, 5)?;

    let head = ZString::from_slice(&slice)?;
    println!(
        "String from slice: {}, Length: {}",
        String::from_utf8_lossy(head.as_bytes()),
        head.len()
    );
    assert_eq!(head, "Hello");
    Ok(())
}

fn growing_in_place() -> Result<()> {
    let mut s = ZString::from_bytes(b"Hello")?;
    println!("Before append: len={}, capacity={}", s.len(), s.capacity());

    s.append(b", World!")?;
    println!("After append:  len={}, capacity={}", s.len(), s.capacity());
    assert_eq!(s.as_bytes(), b"Hello, World!");

    s.resize(20)?;
    println!("After resize:  len={}, capacity={}", s.len(), s.capacity());

    s.resize(5)?;
    println!("After shrink:  len={}, capacity={}", s.len(), s.capacity());
    assert_eq!(s.as_bytes(), b"Hello");
    Ok(())
}

fn comparing_strings() -> Result<()> {
    let a = ZString::from_bytes(b"Hello")?;
    let b = ZString::from_bytes(b"Hello")?;
    let c = ZString::from_bytes(b"Goodbye")?;

    println!("a == b: {}, a == c: {}", a == b, a == c);
    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}

fn explicit_destruction() -> Result<()> {
    let mut slot = Some(ZString::from_bytes(b"Hello, World!")?);

    let freed = destroy_string(&mut slot);
    println!("Destroyed string, freed {freed} bytes");
    assert!(slot.is_none());

    // Idempotent: a second destroy of the same handle is a no-op.
    assert_eq!(destroy_string(&mut slot), 0);
    Ok(())
}

fn main() -> Result<()> {
    println!("zstring tour");
    println!("============");

    creating_a_string()?;
    copying_through_a_view()?;
    starting_empty()?;
    copying_through_a_slice()?;
    growing_in_place()?;
    comparing_strings()?;
    explicit_destruction()?;

    println!("All scenarios passed.");
    Ok(())
}
