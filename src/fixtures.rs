// Test fixtures: trimmed-down copies of the live index and detail documents

use crate::fetch::StaticFetcher;

pub const COMMITTEE_INDEX_URL: &str = "http://test/xml/ausschuesse/index.xml";
pub const MEMBER_INDEX_URL: &str = "http://test/xml/mdb/index.xml";
pub const COMMITTEE_URL: &str = "http://test/xml/ausschuesse/a08.xml";
pub const MEMBER_URL: &str = "http://test/xml/mdb/1234.xml";

pub const COMMITTEE_INDEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ausschuesse>
  <ausschuss>
    <ausschussName>Finanzausschuss</ausschussName>
    <ausschussDetailXML>http://test/xml/ausschuesse/a08.xml</ausschussDetailXML>
  </ausschuss>
</ausschuesse>"#;

pub const MEMBER_INDEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mdbUebersicht>
  <mdbs>
    <mdb fraktion="SPD">
      <mdbName>Muster, Erika</mdbName>
      <mdbInfoXMLURL>http://test/xml/mdb/1234.xml</mdbInfoXMLURL>
    </mdb>
  </mdbs>
</mdbUebersicht>"#;

pub const COMMITTEE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ausschussDetails>
  <ausschussId>a08</ausschussId>
  <ausschussName>Finanzausschuss</ausschussName>
  <ausschussAufgabe><![CDATA[Der Finanzausschuss berät Steuergesetze.]]></ausschussAufgabe>
  <ausschussCopyright>Deutscher Bundestag</ausschussCopyright>
  <ausschussBild><ausschussBildURL>http://test/bild/a08.jpg</ausschussBildURL></ausschussBild>
  <ausschussSourceURL>http://test/bundestag/ausschuesse18/a08/index.jsp</ausschussSourceURL>
  <ausschussKontakt>Platz der Republik 1, 11011 Berlin</ausschussKontakt>
</ausschussDetails>"#;

pub const MEMBER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mdbInfo>
  <mdbID status="Aktiv">1234</mdbID>
  <mdbName>
    <mdbZuname>Muster</mdbZuname>
    <mdbVorname>Erika</mdbVorname>
    <mdbAdelstitel></mdbAdelstitel>
    <mdbAkademischerTitel>Dr.</mdbAkademischerTitel>
    <mdbOrtszusatz></mdbOrtszusatz>
  </mdbName>
  <mdbBiografischeAngaben>
    <mdbGeburtsdatum>03.11.1975</mdbGeburtsdatum>
    <mdbReligionKonfession>evangelisch</mdbReligionKonfession>
    <mdbHochschulbildung>Rechtswissenschaft</mdbHochschulbildung>
    <mdbBeruf berufsfeld="Rechtspflege">Rechtsanwältin</mdbBeruf>
    <mdbGeschlecht>Weiblich</mdbGeschlecht>
    <mdbFamilienstand>verheiratet</mdbFamilienstand>
    <mdbAnzahlKinder>2</mdbAnzahlKinder>
    <mdbFraktion>SPD</mdbFraktion>
    <mdbPartei>SPD</mdbPartei>
    <mdbLand>Berlin</mdbLand>
    <mdbGewaehlt>Direkt gewählt</mdbGewaehlt>
    <mdbBioURL>http://test/bundestag/abgeordnete18/biografien/M/muster_erika.html</mdbBioURL>
    <mdbBiografischeInformationen><![CDATA[<p>Geboren in Berlin.</p>]]></mdbBiografischeInformationen>
    <mdbWissenswertes></mdbWissenswertes>
    <mdbHomepageURL>http://erika-muster.example</mdbHomepageURL>
    <mdbSonstigeWebsites>
      <mdbSonstigeWebsite>
        <mdbSonstigeWebsiteTitel>Twitter</mdbSonstigeWebsiteTitel>
        <mdbSonstigeWebsiteURL>https://twitter.example/erika</mdbSonstigeWebsiteURL>
      </mdbSonstigeWebsite>
    </mdbSonstigeWebsites>
    <mdbTelefon>030 227 00000</mdbTelefon>
    <mdbVeroeffentlichungspflichtigeAngaben></mdbVeroeffentlichungspflichtigeAngaben>
  </mdbBiografischeAngaben>
  <mdbMedien>
    <mdbFotoURL>http://test/bild/1234.jpg</mdbFotoURL>
    <mdbFotoCopyright>Deutscher Bundestag</mdbFotoCopyright>
    <mdbRedenVorPlenumURL>http://test/reden/1234</mdbRedenVorPlenumURL>
    <mdbRedenVorPlenumRSS>http://test/reden/1234.rss</mdbRedenVorPlenumRSS>
  </mdbMedien>
  <mdbWahlkreis>
    <mdbWahlkreisNummer>75</mdbWahlkreisNummer>
    <mdbWahlkreisName>Berlin-Mitte</mdbWahlkreisName>
    <mdbWahlkreisURL>http://test/wahlkreis/75</mdbWahlkreisURL>
  </mdbWahlkreis>
  <mdbMitgliedschaften>
    <mdbMitgliedschaft title="Ordentliches Mitglied">
      <mdbGremium id="a08">
        <gremiumName>Finanzausschuss</gremiumName>
        <gremiumURL>http://test/bundestag/ausschuesse18/a08/index.jsp</gremiumURL>
      </mdbGremium>
    </mdbMitgliedschaft>
  </mdbMitgliedschaften>
</mdbInfo>"#;

/// Member document with one fragment swapped out
pub fn member_with(from: &str, to: &str) -> String {
    assert!(MEMBER.contains(from), "fixture has no {from}");
    MEMBER.replace(from, to)
}

/// One committee, one member referencing it
pub fn fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .with(COMMITTEE_INDEX_URL, COMMITTEE_INDEX)
        .with(MEMBER_INDEX_URL, MEMBER_INDEX)
        .with(COMMITTEE_URL, COMMITTEE)
        .with(MEMBER_URL, MEMBER)
}
