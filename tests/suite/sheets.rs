//! Usage sheets and sandboxes

use insta::assert_snapshot;
use turnstile::sheet;
use turnstile_calculus::Calculus;
use turnstile_render::{Renderer, Theme};

use super::shown;

#[test]
fn lk_sheet() {
    let block = sheet(&Renderer::default(), Calculus::Lk, false).unwrap();
    assert_snapshot!(shown(&block), @r"


                                     Gentzen LK
                                     **********


          Variables


                    p q r s t u


          Connectives


                   ¬A A→B A∧B A∨B



          Axiom



                    ――――――― (I)
                     A ⊢ A



          Cut


               Γ ⊢ Δ,A  A,Σ ⊢ Π
              ―――――――――――――――――― (Cut)
                  Γ,Σ ⊢ Δ,Π



          Logical Rules


                   Γ,A ⊢ Δ                         Γ ⊢ A,Δ
                 ――――――――――― (∧L₁)               ――――――――――― (∨R₁)
                  Γ,A∧B ⊢ Δ                       Γ ⊢ A∨B,Δ


                   Γ,B ⊢ Δ                         Γ ⊢ B,Δ
                 ――――――――――― (∧L₂)               ――――――――――― (∨R₂)
                  Γ,A∧B ⊢ Δ                       Γ ⊢ A∨B,Δ


               Γ,A ⊢ Δ  Σ,B ⊢ Π                Γ ⊢ A,Δ  Σ ⊢ B,Π
              ―――――――――――――――――― (∨L)         ―――――――――――――――――― (∧R)
                Γ,Σ,A∨B ⊢ Δ,Π                   Γ,Σ ⊢ A∧B,Δ,Π


               Γ ⊢ A,Δ  Σ,B ⊢ Π                    Γ,A ⊢ B,Δ
              ―――――――――――――――――― (→L)             ――――――――――― (→R)
                Γ,Σ,A→B ⊢ Δ,Π                      Γ ⊢ A→B,Δ


                   Γ ⊢ A,Δ                         Γ,A ⊢ Δ
                  ―――――――――― (¬L)                 ―――――――――― (¬R)
                   Γ,¬A ⊢ Δ                        Γ ⊢ ¬A,Δ



          Structural Rules


                     Γ ⊢ Δ                           Γ ⊢ Δ
                   ――――――――― (WL)                  ――――――――― (WR)
                    Γ,A ⊢ Δ                         Γ ⊢ A,Δ


                   Γ,A,A ⊢ Δ                       Γ ⊢ A,A,Δ
                  ――――――――――― (CL)                ――――――――――― (CR)
                    Γ,A ⊢ Δ                         Γ ⊢ A,Δ


                   Σ,A ⊢ Π                         Σ ⊢ A,Π
                  ――――――――― (RotL)                ――――――――― (RotR)
                   A,Σ ⊢ Π                         Σ ⊢ Π,A


                   Σ,A,B ⊢ Π                       Σ ⊢ A,B,Π
                  ――――――――――― (PL)                ――――――――――― (PR)
                   Σ,B,A ⊢ Π                       Σ ⊢ B,A,Π



          Sandbox


                   ――――――― (I)
                    p ⊢ p
                ――――――――――――― (→R)
                    ⊢ p→p
             ―――――――――――――――――――― (WL)
                p→(q→¬p) ⊢ p→p
          ――――――――――――――――――――――――――― (→R)
              ⊢ (p→(q→¬p))→(p→p)
    ");
}

#[test]
fn la3_sheet() {
    let block = sheet(&Renderer::default(), Calculus::La3, false).unwrap();
    assert_snapshot!(shown(&block), @r"


                                Łukasiewicz Axioms 3
                                ********************


          Variables


                    p q r s t u


          Connectives


                       ¬A A→B



          Axioms



                  ――――――――――― (A1)        ――――――――――――――――――――――――――― (A2)     ――――――――――――――――― (A3)
                   ⊢ A→(B→A)               ⊢ (A→(B→C))→((A→B)→(A→C))            ⊢ (¬A→¬B)→(B→A)



          Rule


                  ⊢ A→B  ⊢ A
                 ―――――――――――― (MP)
                     ⊢ B



          Sandbox


             ――――――――――――――――――――――――――――――――――――― (A2)  ―――――――――――――――― (A1)
              ⊢ (p→((q→¬p)→p))→((p→(q→¬p))→(p→p))         ⊢ p→((q→¬p)→p)
          ――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――――― (MP)
                                  ⊢ (p→(q→¬p))→(p→p)
    ");
}

#[test]
fn sandbox_only_skips_the_catalog() {
    let block = sheet(&Renderer::default(), Calculus::Lk, true).unwrap();
    let lines: Vec<&str> = block.lines().iter().map(|l| l.trim_end()).collect();
    assert_eq!(lines[0], "Sandbox");
    assert_eq!(lines[1], "");
    assert_eq!(lines.last().copied(), Some(""));
    assert_eq!(block.height(), 13);
    assert!(lines.iter().any(|l| l.trim() == "⊢ (p→(q→¬p))→(p→p)"));
}

#[test]
fn ascii_theme_changes_every_glyph() {
    let renderer = Renderer {
        theme: Theme::ascii(),
        ..Renderer::default()
    };
    let text = shown(&sheet(&renderer, Calculus::Lk, true).unwrap());
    assert!(text.contains("|- (p->(q->~p))->(p->p)"));
    assert!(text.contains("(->R)"));
    assert!(!text.contains('⊢'));
}

#[test]
fn sheets_are_deterministic() {
    let renderer = Renderer::default();
    for calculus in Calculus::all() {
        let first = sheet(&renderer, *calculus, false).unwrap();
        let second = sheet(&renderer, *calculus, false).unwrap();
        assert_eq!(first, second);
    }
}
